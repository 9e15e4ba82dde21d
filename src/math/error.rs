// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Too many sites: at most {limit} are supported, got {actual}")]
    TooManySites { limit: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
