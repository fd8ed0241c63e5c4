use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No providers available: {0}")]
    NoProvidersAvailable(String),
    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),
}

impl From<serde_json::Error> for ResolveError {
    fn from(error: serde_json::Error) -> Self {
        ResolveError::InvalidReferenceData(error.to_string())
    }
}

impl Serialize for ResolveError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
