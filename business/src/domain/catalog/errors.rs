/// Failure of a read-only call to the remote catalog API.
///
/// Every variant renders a non-empty, code-style message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("api.network: {0}")]
    Network(String),
    #[error("api.status: {0}")]
    Status(u16),
    #[error("api.decode: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(reason: impl Into<String>) -> Self {
        FetchError::Network(reason.into())
    }
    pub fn status(code: u16) -> Self {
        FetchError::Status(code)
    }
    pub fn decode(reason: impl Into<String>) -> Self {
        FetchError::Decode(reason.into())
    }
}
