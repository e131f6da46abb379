#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    RemoteReadFailed(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RemoteReadFailed(detail) => {
                write!(f, "Remote read failed: {}", detail)
            }
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;
