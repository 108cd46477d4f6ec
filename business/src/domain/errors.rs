/// Storage errors for the local catalog cache.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.database_error")]
    Database,
}

impl StorageError {
    pub fn database() -> Self {
        StorageError::Database
    }
}

/// Errors raised while talking to the remote catalog service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("transport.unreachable")]
    Unreachable,
    #[error("transport.unexpected_status.{0}")]
    UnexpectedStatus(u16),
    #[error("transport.decode_error")]
    Decode,
    #[error("transport.timeout")]
    Timeout,
    #[error("transport.rejected: {0}")]
    Rejected(String),
}

impl TransportError {
    pub fn unreachable() -> Self {
        TransportError::Unreachable
    }
    pub fn decode() -> Self {
        TransportError::Decode
    }
    pub fn timeout() -> Self {
        TransportError::Timeout
    }
}
