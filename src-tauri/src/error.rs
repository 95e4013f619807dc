use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CareFlowError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Not authenticated: {0}")]
    Auth(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<CareFlowError> for String {
    fn from(err: CareFlowError) -> Self {
        err.to_string()
    }
}
