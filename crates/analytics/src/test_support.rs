//! In-memory collaborators for the deriver tests.

use api_client::error::ApiError;
use api_client::{EventLogSource, IdentityResolver};
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{DateWindow, EventType, PlateAppearanceRecord, PlayerId};
use std::collections::HashMap;

pub fn record(date: NaiveDate, event_type: EventType, pitcher: Option<u32>) -> PlateAppearanceRecord {
    PlateAppearanceRecord {
        date,
        event_type,
        pitcher_id: pitcher.map(PlayerId),
        home_team: "CHC".to_string(),
        away_team: "LAD".to_string(),
    }
}

pub fn hr(date: NaiveDate, pitcher: Option<u32>) -> PlateAppearanceRecord {
    record(date, EventType::HomeRun, pitcher)
}

/// Returns the same records for every query, like a source that ignores season bounds.
pub struct FakeEventLog {
    records: Vec<PlateAppearanceRecord>,
    fail: bool,
}

impl FakeEventLog {
    pub fn new(records: Vec<PlateAppearanceRecord>) -> Self {
        Self { records, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl EventLogSource for FakeEventLog {
    async fn fetch(
        &self,
        _player_id: PlayerId,
        _window: DateWindow,
    ) -> Result<Vec<PlateAppearanceRecord>, ApiError> {
        if self.fail {
            return Err(ApiError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

/// Knows a fixed set of names; every other id is a lookup failure.
pub struct FakeResolver {
    names: HashMap<PlayerId, String>,
}

impl FakeResolver {
    pub fn with_names(names: &[(u32, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(id, name)| (PlayerId(*id), name.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl IdentityResolver for FakeResolver {
    async fn resolve(&self, person_id: PlayerId) -> Result<String, ApiError> {
        self.names
            .get(&person_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("person {person_id}")))
    }
}
