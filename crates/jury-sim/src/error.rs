#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to parse log directive: `{0}`")]
    LogParse(#[from] tracing_subscriber::filter::ParseError),
    #[error("I/O error: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Election(#[from] condorcet::ElectionError),
    #[error("Scatter error: `{0}`")]
    Scatter(#[from] circle_scatter::ScatterError),
}
