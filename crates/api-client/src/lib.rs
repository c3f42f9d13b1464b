use crate::error::ApiError;
use async_trait::async_trait;
use core_types::{DateWindow, PlateAppearanceRecord, PlayerId, RosterEntry, Team};

pub mod error;
pub mod responses;
pub mod roster_cache;
pub mod stats_api;

// --- Public API ---
pub use roster_cache::CachedRosterDirectory;
pub use stats_api::StatsApiClient;

/// Lists the teams and active rosters that player and team identifiers are drawn from.
#[async_trait]
pub trait RosterDirectory: Send + Sync {
    /// All active major-league teams.
    async fn list_teams(&self) -> Result<Vec<Team>, ApiError>;

    /// Every player on an active roster, tagged with their team abbreviation.
    async fn list_active_players(&self) -> Result<Vec<RosterEntry>, ApiError>;
}

/// The per-player plate appearance log.
///
/// Implementations are queried by arbitrary caller-supplied ranges and are not
/// required to respect season boundaries or to return records in date order.
#[async_trait]
pub trait EventLogSource: Send + Sync {
    async fn fetch(
        &self,
        player_id: PlayerId,
        window: DateWindow,
    ) -> Result<Vec<PlateAppearanceRecord>, ApiError>;
}

/// Reverse lookup from a person id to a display name.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, person_id: PlayerId) -> Result<String, ApiError>;
}

/// The MLB static headshot for a player.
pub fn headshot_url(player_id: PlayerId) -> String {
    format!(
        "https://img.mlbstatic.com/mlb-photos/image/upload/w_180,q_100/v1/people/{}/headshot/67/current.png",
        player_id
    )
}
