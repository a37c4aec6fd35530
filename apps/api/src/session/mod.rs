//! Per-session state: the current graph, the fetch-in-flight flag, and the
//! running usage estimate. Held in process memory only — nothing survives a
//! restart, and one session is never shared across users.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::filters::FilterRecord;
use crate::mapper::models::CareerGraph;

/// Running usage estimate for one session.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    /// Rough token count at 4 characters per token. Approximate by design.
    pub token_estimate: f64,
    /// Flat-rate cost estimate: one fixed increment per completion call.
    pub cost_estimate: f64,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub graph: Option<CareerGraph>,
    /// The filter snapshot the current graph was generated from.
    pub filters: Option<FilterRecord>,
    pub pending_fetch: bool,
    pub token_estimate: f64,
    pub cost_estimate: f64,
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    fn new() -> Self {
        SessionState {
            graph: None,
            filters: None,
            pending_fetch: false,
            token_estimate: 0.0,
            cost_estimate: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn usage(&self) -> UsageReport {
        UsageReport {
            token_estimate: self.token_estimate,
            cost_estimate: self.cost_estimate,
        }
    }
}

/// In-process session map. Cloning shares the underlying store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, SessionState::new());
        id
    }

    /// Returns a snapshot copy of the session.
    pub async fn get(&self, id: Uuid) -> Result<SessionState, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> Result<T, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        Ok(f(session))
    }

    pub async fn set_pending(&self, id: Uuid, pending: bool) -> Result<(), AppError> {
        self.with_session(id, |s| s.pending_fetch = pending).await
    }

    /// Adds one completion call's worth of usage. Counters only grow; only
    /// `clear` resets them.
    pub async fn record_usage(&self, id: Uuid, tokens: f64, cost: f64) -> Result<(), AppError> {
        self.with_session(id, |s| {
            s.token_estimate += tokens;
            s.cost_estimate += cost;
        })
        .await
    }

    /// Replaces the session's graph wholesale along with the filters that
    /// produced it.
    pub async fn install_graph(
        &self,
        id: Uuid,
        graph: CareerGraph,
        filters: FilterRecord,
    ) -> Result<(), AppError> {
        self.with_session(id, |s| {
            s.graph = Some(graph);
            s.filters = Some(filters);
        })
        .await
    }

    /// The "clear" action: drops the graph and resets the counters.
    pub async fn clear(&self, id: Uuid) -> Result<(), AppError> {
        self.with_session(id, |s| {
            s.graph = None;
            s.filters = None;
            s.pending_fetch = false;
            s.token_estimate = 0.0;
            s.cost_estimate = 0.0;
        })
        .await
    }
}
