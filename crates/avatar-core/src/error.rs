use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvatarError {
    #[error("unknown avatar mode `{0}`")]
    UnknownMode(String),
    #[error("mode index {index} out of range (have {count} modes)")]
    IndexOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, AvatarError>;
