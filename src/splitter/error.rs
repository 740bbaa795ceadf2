use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("Invalid argument: max chunk size must be positive (got {max_size})")]
    InvalidArgument { max_size: usize },
}
