use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[cfg(feature = "client")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[cfg(feature = "client")]
    #[error("Unexpected response status: {0}")]
    Status(reqwest::StatusCode),

    #[cfg(feature = "client")]
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to deserialize {type_name}: {source}, data: {data}")]
    Deserialization {
        type_name: String,
        data: String,
        source: serde_json::Error,
    },

    #[error("Score of {name} is not a number, response: {body}")]
    InvalidScore { name: String, body: String },
}
