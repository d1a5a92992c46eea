#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BackendsError {
    #[error("invalid input lenght: expected {expected}, received {received}")]
    InvalidInputLenght { expected: usize, received: usize },
    #[error("input is not a canonical point encoding")]
    NonCanonicalPoint,
    #[error("input is not a canonical scalar encoding")]
    NonCanonicalScalar,
    #[error("scalar is not invertable")]
    NonInvertible,
    #[error("system randomness source is unavailable")]
    Randomness,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BlsError {
    #[error("empty message")]
    EmptyMessage,
    #[error("verification is failed")]
    FailedVerification,
    #[error("failed to sign, resulting point is invalid")]
    Failed,
}
