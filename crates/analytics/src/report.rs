use crate::deriver::HomeRunPaceDeriver;
use api_client::headshot_url;
use chrono::NaiveDate;
use core_types::{DateWindow, HomeRunEvent, PlayerId, RosterEntry};
use serde::Serialize;

/// Everything the display layers need to show one player's pace.
///
/// This struct is the data transfer object for a single player throughout
/// the CLI and the web API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceReport {
    pub player: String,
    pub team: String,
    pub player_id: PlayerId,
    pub headshot_url: String,
    /// Set when the window starts before the team's first real game.
    pub advisory: Option<String>,
    pub events: Vec<HomeRunEvent>,
}

/// One point of the cumulative home run line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub home_runs: u32,
}

/// A single colored line on the pace chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

impl PaceReport {
    pub async fn build(
        deriver: &HomeRunPaceDeriver,
        player: &RosterEntry,
        window: DateWindow,
    ) -> Self {
        let advisory = deriver
            .policy()
            .advisory(&player.name, &player.team, window.start);
        let events = deriver.derive(player.player_id, &player.team, window).await;

        Self {
            player: player.name.clone(),
            team: player.team.clone(),
            player_id: player.player_id,
            headshot_url: headshot_url(player.player_id),
            advisory,
            events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The player's home run count at the end of the window.
    pub fn total(&self) -> u32 {
        self.events.last().map_or(0, |e| e.sequence_number)
    }

    pub fn chart_series(&self, color: &str) -> ChartSeries {
        ChartSeries {
            label: self.player.clone(),
            color: color.to_string(),
            points: self
                .events
                .iter()
                .map(|e| ChartPoint {
                    date: e.date,
                    home_runs: e.sequence_number,
                })
                .collect(),
        }
    }
}
