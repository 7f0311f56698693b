pub mod error;
pub mod player;
pub mod render;
pub mod view;

#[cfg(feature = "client")]
use reqwest::StatusCode;
#[cfg(feature = "client")]
use tracing::debug;
#[cfg(feature = "client")]
use url::Url;

pub use crate::{
    error::LeagueError,
    player::Player,
    view::{LeagueState, ScoresView},
};

/// The league server the view talks to.
pub const URL: &str = "http://localhost:5050";

/// Anything the league table can be loaded from.
pub trait LeagueSource {
    fn fetch_league(&self) -> impl Future<Output = Result<Vec<Player>, LeagueError>> + Send;
}

#[cfg(feature = "client")]
#[derive(Debug, Clone)]
pub struct LeagueClient {
    base: Url,
    client: reqwest::Client,
}

#[cfg(feature = "client")]
impl LeagueClient {
    /// Client for the fixed [`URL`].
    pub fn new() -> Result<Self, LeagueError> {
        Self::with_base_url(URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, LeagueError> {
        let base =
            Url::parse(base).map_err(|e| LeagueError::InvalidBaseUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(LeagueError::InvalidBaseUrl(base.to_string()));
        }
        Ok(Self {
            base,
            client: reqwest::Client::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `segments` are appended to the base path, each percent-encoded.
    fn url_path(&self, segments: &[&str]) -> Result<Url, LeagueError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| LeagueError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_league(&self) -> Result<Vec<Player>, LeagueError> {
        let url = self.url_path(&["league"])?;
        debug!(%url, "fetching league table");
        let text = self.client.get(url).send().await?.text().await?;
        serde_json::from_str(&text).map_err(|source| LeagueError::Deserialization {
            type_name: "league table".into(),
            data: text,
            source,
        })
    }

    /// `None` when the server doesn't know `name`.
    pub async fn player_score(&self, name: &str) -> Result<Option<u64>, LeagueError> {
        let url = self.url_path(&["players", name])?;
        debug!(%url, "fetching player score");
        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => return Err(LeagueError::Status(status)),
            _ => {}
        }
        let text = response.text().await?;
        let score = text.trim().parse().map_err(|_| LeagueError::InvalidScore {
            name: name.to_string(),
            body: text.clone(),
        })?;
        Ok(Some(score))
    }

    pub async fn record_win(&self, name: &str) -> Result<(), LeagueError> {
        let url = self.url_path(&["players", name])?;
        debug!(%url, "recording win");
        let status = self.client.post(url).send().await?.status();
        if !status.is_success() {
            return Err(LeagueError::Status(status));
        }
        Ok(())
    }
}

#[cfg(feature = "client")]
impl LeagueSource for LeagueClient {
    fn fetch_league(&self) -> impl Future<Output = Result<Vec<Player>, LeagueError>> + Send {
        self.get_league()
    }
}
