use crate::error::ApiError;
use crate::RosterDirectory;
use async_trait::async_trait;
use core_types::{RosterEntry, Team};
use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

struct Cached<T> {
    fetched_at: Instant,
    value: T,
}

/// A `RosterDirectory` that remembers the last answer for `ttl`.
///
/// Rosters change a few times a week at most, while every parameter change in
/// the UI needs the full player list. Entries older than `ttl` are refetched on
/// the next read. If that refetch fails, the stale list is served instead.
pub struct CachedRosterDirectory<D> {
    inner: D,
    ttl: Duration,
    teams: RwLock<Option<Cached<Vec<Team>>>>,
    players: RwLock<Option<Cached<Vec<RosterEntry>>>>,
}

impl<D: RosterDirectory> CachedRosterDirectory<D> {
    pub fn new(inner: D, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            teams: RwLock::new(None),
            players: RwLock::new(None),
        }
    }

    async fn read_through<T, F, Fut>(
        &self,
        slot: &RwLock<Option<Cached<T>>>,
        what: &'static str,
        fetch: F,
    ) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T, ApiError>> + Send,
    {
        if let Some(cached) = slot.read().await.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.value.clone());
            }
        }

        let mut guard = slot.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(cached) = guard.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.value.clone());
            }
        }

        match fetch().await {
            Ok(value) => {
                tracing::debug!(what, "Roster cache refreshed.");
                *guard = Some(Cached {
                    fetched_at: Instant::now(),
                    value: value.clone(),
                });
                Ok(value)
            }
            Err(e) => match guard.as_ref() {
                Some(stale) => {
                    tracing::warn!(what, error = %e, "Roster refresh failed, serving stale data.");
                    Ok(stale.value.clone())
                }
                None => Err(e),
            },
        }
    }
}

#[async_trait]
impl<D: RosterDirectory> RosterDirectory for CachedRosterDirectory<D> {
    async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.read_through(&self.teams, "teams", || self.inner.list_teams())
            .await
    }

    async fn list_active_players(&self) -> Result<Vec<RosterEntry>, ApiError> {
        self.read_through(&self.players, "players", || {
            self.inner.list_active_players()
        })
        .await
    }
}
