//! Server-side builder sessions, one per open portfolio.

use crate::builder::InMemoryBuilder;
use crate::error::BuilderError;
use folio_common::{Block, Page, Portfolio};
use folio_editor::{CanvasView, EditSession};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::Mutex;

struct SessionEntry {
    portfolio: Portfolio,
    session: EditSession,
}

/// Everything the builder screen needs to draw itself
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderState {
    pub portfolio_id: u64,
    pub portfolio: Portfolio,
    pub page: Page,
    pub canvas: CanvasView,
    pub selected_block_id: Option<String>,
    pub selected_block: Option<Block>,
    pub saving: bool,
    pub accepting_drop: bool,
    pub version: u64,
}

impl BuilderState {
    pub fn capture(portfolio: &Portfolio, session: &EditSession) -> Self {
        Self {
            portfolio_id: portfolio.id,
            portfolio: portfolio.clone(),
            page: session.document().page().clone(),
            canvas: session.canvas(),
            selected_block_id: session.selection().map(str::to_string),
            selected_block: session.selected_block().cloned(),
            saving: session.is_saving(),
            accepting_drop: session.is_accepting_drop(),
            version: session.document().version,
        }
    }
}

pub struct WorkspaceState {
    builder: InMemoryBuilder,
    sessions: Mutex<HashMap<u64, SessionEntry>>,
}

impl WorkspaceState {
    pub fn new(builder: InMemoryBuilder) -> Self {
        Self {
            builder,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn builder(&self) -> &InMemoryBuilder {
        &self.builder
    }

    /// Open a session, replacing any session already open for the portfolio
    ///
    /// The replaced session's saves are awaited first, outside the session
    /// map lock, so the new session loads what it wrote.
    pub async fn open(&self, portfolio_id: u64) -> Result<BuilderState, BuilderError> {
        let previous = self.sessions.lock().await.remove(&portfolio_id);
        if let Some(mut previous) = previous {
            let failed = previous.session.flush().await;
            if failed > 0 {
                tracing::warn!(portfolio_id, failed, "replaced session had failed saves");
            }
        }

        let (portfolio, session) = self.builder.open_builder(portfolio_id).await?;
        let state = BuilderState::capture(&portfolio, &session);
        self.sessions
            .lock()
            .await
            .insert(portfolio_id, SessionEntry { portfolio, session });
        Ok(state)
    }

    /// Run `f` against the open session and return it with the resulting state
    pub async fn with_session<R>(
        &self,
        portfolio_id: u64,
        f: impl FnOnce(&mut EditSession) -> R,
    ) -> Result<(R, BuilderState), BuilderError> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .get_mut(&portfolio_id)
            .ok_or(BuilderError::SessionNotOpen(portfolio_id))?;

        let output = f(&mut entry.session);
        Ok((output, BuilderState::capture(&entry.portfolio, &entry.session)))
    }

    pub async fn snapshot(&self, portfolio_id: u64) -> Result<BuilderState, BuilderError> {
        let (_, state) = self.with_session(portfolio_id, |_| ()).await?;
        Ok(state)
    }

    /// Wait for the session's outstanding saves. Returns how many failed.
    pub async fn flush(&self, portfolio_id: u64) -> Result<usize, BuilderError> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .get_mut(&portfolio_id)
            .ok_or(BuilderError::SessionNotOpen(portfolio_id))?;
        Ok(entry.session.flush().await)
    }

    pub async fn publish(&self, portfolio_id: u64) -> Result<Portfolio, BuilderError> {
        let portfolio = self.builder.publish(portfolio_id).await?;
        if let Some(entry) = self.sessions.lock().await.get_mut(&portfolio_id) {
            entry.portfolio = portfolio.clone();
        }
        Ok(portfolio)
    }

    /// Delete a portfolio and close its session. Unknown ids fail with not found.
    pub async fn delete_portfolio(&self, portfolio_id: u64) -> Result<(), BuilderError> {
        self.builder.delete_portfolio(portfolio_id).await?;
        self.sessions.lock().await.remove(&portfolio_id);
        Ok(())
    }

    pub async fn open_sessions(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
