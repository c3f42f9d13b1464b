use crate::report::PaceReport;
use core_types::HomeRunEvent;
use serde::Serialize;

/// A home run tagged with the player it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedHomeRunEvent {
    pub player: String,
    #[serde(flatten)]
    pub event: HomeRunEvent,
}

/// Two players' home run logs overlaid for a head-to-head chart.
///
/// Each event keeps its own player's cumulative count; nothing is re-sorted
/// or renumbered across the two logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub players: [String; 2],
    pub events: Vec<TaggedHomeRunEvent>,
}

impl Comparison {
    /// Merges two logs, or returns `None` when either side has nothing to show.
    pub fn merge(first: (&str, &[HomeRunEvent]), second: (&str, &[HomeRunEvent])) -> Option<Self> {
        if first.1.is_empty() || second.1.is_empty() {
            return None;
        }

        let events = [first, second]
            .into_iter()
            .flat_map(|(player, events)| {
                events.iter().map(move |event| TaggedHomeRunEvent {
                    player: player.to_string(),
                    event: event.clone(),
                })
            })
            .collect();

        Some(Self {
            players: [first.0.to_string(), second.0.to_string()],
            events,
        })
    }

    pub fn from_reports(first: &PaceReport, second: &PaceReport) -> Option<Self> {
        Self::merge(
            (&first.player, &first.events),
            (&second.player, &second.events),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn log(count: u32, first_day: u32) -> Vec<HomeRunEvent> {
        (1..=count)
            .map(|n| HomeRunEvent {
                sequence_number: n,
                date: NaiveDate::from_ymd_opt(2025, 4, first_day + n).unwrap(),
                home_team: "NYY".into(),
                away_team: "BOS".into(),
                pitcher_name: String::new(),
            })
            .collect()
    }

    #[test]
    fn merge_keeps_each_players_numbering() {
        let ohtani = log(3, 0);
        let judge = log(5, 1);

        let comparison =
            Comparison::merge(("Shohei Ohtani", &ohtani), ("Aaron Judge", &judge)).unwrap();

        let numbering: Vec<(&str, u32)> = comparison
            .events
            .iter()
            .map(|tagged| (tagged.player.as_str(), tagged.event.sequence_number))
            .collect();
        assert_eq!(
            numbering,
            vec![
                ("Shohei Ohtani", 1),
                ("Shohei Ohtani", 2),
                ("Shohei Ohtani", 3),
                ("Aaron Judge", 1),
                ("Aaron Judge", 2),
                ("Aaron Judge", 3),
                ("Aaron Judge", 4),
                ("Aaron Judge", 5),
            ]
        );
    }

    #[test]
    fn merge_is_skipped_when_either_side_is_empty() {
        let judge = log(5, 1);
        assert_eq!(Comparison::merge(("Shohei Ohtani", &[]), ("Aaron Judge", &judge)), None);
        assert_eq!(Comparison::merge(("Aaron Judge", &judge), ("Shohei Ohtani", &[])), None);
    }

    #[test]
    fn tagged_events_serialize_flat() {
        let judge = log(1, 1);
        let comparison = Comparison::merge(("Shohei Ohtani", &judge), ("Aaron Judge", &judge)).unwrap();

        let json = serde_json::to_value(&comparison.events[1]).unwrap();
        assert_eq!(json["player"], "Aaron Judge");
        assert_eq!(json["sequence_number"], 1);
        assert_eq!(json["date"], "2025-04-02");
    }
}
