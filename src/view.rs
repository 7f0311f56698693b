use maud::Markup;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error};

use crate::{LeagueSource, player::Player, render};

/// What the league table currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LeagueState {
    /// Nothing fetched yet, or every fetch so far failed.
    #[default]
    Empty,
    /// The last successfully fetched table, in server order.
    Loaded(Vec<Player>),
}

impl LeagueState {
    pub fn players(&self) -> &[Player] {
        match self {
            LeagueState::Empty => &[],
            LeagueState::Loaded(players) => players,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LeagueState::Loaded(_))
    }
}

/// Fetch the league table once and replace `state` with it.
///
/// Failures are logged and leave `state` untouched.
pub async fn load<S: LeagueSource>(source: &S, state: &watch::Sender<LeagueState>) {
    match source.fetch_league().await {
        Ok(players) => {
            debug!(rows = players.len(), "league table loaded");
            state.send_replace(LeagueState::Loaded(players));
        }
        Err(err) => error!(error = %err, "Error fetching league table"),
    }
}

/// A mounted league table.
///
/// Mounting starts the single fetch in the background; dropping the view
/// unmounts it and aborts a fetch that is still in flight.
#[derive(Debug)]
pub struct ScoresView {
    state: watch::Receiver<LeagueState>,
    loader: JoinHandle<()>,
}

impl ScoresView {
    /// # Panics
    /// if called outside of a tokio runtime
    pub fn mount<S>(source: S) -> Self
    where
        S: LeagueSource + Send + Sync + 'static,
    {
        let (tx, state) = watch::channel(LeagueState::Empty);
        let loader = tokio::spawn(async move {
            load(&source, &tx).await;
        });
        Self { state, loader }
    }

    /// Mount against the league server at [`crate::URL`].
    #[cfg(feature = "client")]
    pub fn mount_default() -> Result<Self, crate::error::LeagueError> {
        Ok(Self::mount(crate::LeagueClient::new()?))
    }

    /// Wait for the next state change.
    ///
    /// Returns `false` once the fetch finished without replacing the state,
    /// after which nothing will change anymore.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    pub fn state(&self) -> LeagueState {
        self.state.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.borrow().is_loaded()
    }

    pub fn render(&self) -> Markup {
        render::league_table(self.state.borrow().players())
    }
}

impl Drop for ScoresView {
    fn drop(&mut self) {
        self.loader.abort();
    }
}
