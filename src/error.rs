use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read terraform state: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse terraform state json: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("input is not terraform state json output: {0}")]
    InvalidState(String),

    #[error("failed to render imports: {0}")]
    Render(#[source] serde_json::Error),
}
