use api_client::{EventLogSource, IdentityResolver};
use core_types::{DateWindow, HomeRunEvent, PlateAppearanceRecord, PlayerId, SeasonWindowPolicy};
use std::sync::Arc;

/// Turns a batter's raw plate appearances into their cumulative home run log.
///
/// The deriver never fails. An unreachable event log is an empty log, and a
/// pitcher whose name can't be resolved is shown by id. One bad lookup must
/// not blank out an otherwise valid chart.
#[derive(Clone)]
pub struct HomeRunPaceDeriver {
    events: Arc<dyn EventLogSource>,
    names: Arc<dyn IdentityResolver>,
    policy: SeasonWindowPolicy,
}

impl HomeRunPaceDeriver {
    pub fn new(
        events: Arc<dyn EventLogSource>,
        names: Arc<dyn IdentityResolver>,
        policy: SeasonWindowPolicy,
    ) -> Self {
        Self {
            events,
            names,
            policy,
        }
    }

    pub fn policy(&self) -> &SeasonWindowPolicy {
        &self.policy
    }

    /// Derives the ordered home run log for `player_id` playing for `team`.
    ///
    /// `window` only bounds the upstream query. Season eligibility is decided
    /// per record by the policy, whatever the window says.
    #[tracing::instrument(name = "derive_home_run_pace", skip(self, window))]
    pub async fn derive(
        &self,
        player_id: PlayerId,
        team: &str,
        window: DateWindow,
    ) -> Vec<HomeRunEvent> {
        let records = match self.events.fetch(player_id, window).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Event log unavailable, treating it as empty.");
                return Vec::new();
            }
        };
        if records.is_empty() {
            tracing::debug!("No plate appearances in window.");
            return Vec::new();
        }

        let total = records.len();
        let home_runs = qualifying_home_runs(&self.policy, team, records);
        tracing::debug!(total, qualifying = home_runs.len(), "Filtered plate appearances.");

        let mut events = Vec::with_capacity(home_runs.len());
        for (sequence_number, record) in (1u32..).zip(home_runs) {
            let pitcher_name = match record.pitcher_id {
                Some(pitcher_id) => self.pitcher_name(pitcher_id).await,
                None => String::new(),
            };
            events.push(HomeRunEvent {
                sequence_number,
                date: record.date,
                home_team: record.home_team,
                away_team: record.away_team,
                pitcher_name,
            });
        }
        events
    }

    async fn pitcher_name(&self, pitcher_id: PlayerId) -> String {
        match self.names.resolve(pitcher_id).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(%pitcher_id, error = %e, "Pitcher name lookup failed, showing id.");
                pitcher_id.to_string()
            }
        }
    }
}

/// Keeps the season-eligible home runs, oldest first.
///
/// The sort is stable, so same-day home runs (doubleheaders, multi-homer
/// games) stay in the order the source listed them.
pub fn qualifying_home_runs(
    policy: &SeasonWindowPolicy,
    team: &str,
    records: Vec<PlateAppearanceRecord>,
) -> Vec<PlateAppearanceRecord> {
    let mut home_runs: Vec<PlateAppearanceRecord> = records
        .into_iter()
        .filter(|record| policy.is_eligible(team, record.date))
        .filter(|record| record.event_type.is_home_run())
        .collect();
    home_runs.sort_by_key(|record| record.date);
    home_runs
}
