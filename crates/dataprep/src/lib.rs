pub mod bins;
pub mod config;
pub mod corpus;
pub mod pipeline;
pub mod reformat;

pub use config::{PrepConfig, TrainConfig};
pub use corpus::Corpus;
pub use pipeline::{prepare_joint, PrepSummary};
