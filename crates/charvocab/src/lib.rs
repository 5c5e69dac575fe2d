pub mod error;
pub mod vocab;

pub use error::VocabError;
pub use vocab::CharVocab;
