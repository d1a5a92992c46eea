pub mod aggregate;
pub mod channel;
pub mod dealer;
pub mod poly;


pub use aggregate::CommitmentTable;
pub use dealer::Dealing;
pub use dealer::Node;
pub use poly::Index;

use crate::backends::error::BackendsError;

#[derive(thiserror::Error, Debug)]
pub enum DkgError {
    #[error("randomness: {0}")]
    Randomness(#[source] BackendsError),
    #[error("threshold {threshold} is invalid for {participants} participants")]
    InvalidThreshold { threshold: u32, participants: u32 },
    #[error("commitment row has {received} entries, expected {expected}")]
    CommitmentRowLen { expected: usize, received: usize },
    #[error("commitment halves disagree: {sig} sig-group vs {key} key-group entries")]
    CommitmentPairLen { sig: usize, key: usize },
    #[error("dealer {dealer}: commitment pair {index} failed the pairing check")]
    CommitmentRejected { dealer: Index, index: usize },
    #[error("share from dealer {dealer} for index {index} does not match its commitments")]
    ShareRejected { dealer: Index, index: Index },
    #[error("channel: {0}")]
    Channel(#[from] channel::ChannelError),
    #[error("serialization: {0}")]
    Serialization(#[from] BackendsError),
}
