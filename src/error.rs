//! Error handler for account validation and persistence.

use crate::context::ContextError;

pub type Result<T> = std::result::Result<T, Error>;

/// Enum representing every failure kind a caller can observe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Email or password does not satisfy [`crate::user::User::validate`].
    #[error("malformed entity specification")]
    MalformedEntity,

    #[error("non-existent entity")]
    NotFound,

    #[error("entity already exists")]
    Conflict,

    /// Storage failed for reasons unrelated to input validity.
    #[error("internal error, {details}")]
    Internal {
        details: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Wrap a foreign error into [`Error::Internal`].
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal {
            details: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<ContextError> for Error {
    fn from(err: ContextError) -> Self {
        Self::Internal {
            details: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(Error::internal)
    }
}
