use crate::enums::EventType;
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric MLB person identifier shared by batters and pitchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An active team as listed by the roster directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// The short code used everywhere else, e.g. "LAD".
    pub abbreviation: String,
}

/// One player on an active roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub player_id: PlayerId,
    pub team: String,
}

/// A single plate appearance as returned by the event-log source.
///
/// Records for one query are in whatever order the source produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateAppearanceRecord {
    pub date: NaiveDate,
    pub event_type: EventType,
    pub pitcher_id: Option<PlayerId>,
    pub home_team: String,
    pub away_team: String,
}

/// A qualifying home run annotated with the batter's running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRunEvent {
    /// 1-based cumulative count within the queried window.
    pub sequence_number: u32,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    /// Empty when the record carried no pitcher id.
    pub pitcher_name: String,
}

impl HomeRunEvent {
    /// The `MM-DD` label used by the table and chart axes.
    pub fn month_day(&self) -> String {
        self.date.format("%m-%d").to_string()
    }
}

/// An inclusive calendar range handed to the event-log source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::ReversedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Every season (calendar year) the window touches, oldest first.
    pub fn seasons(&self) -> impl Iterator<Item = i32> {
        use chrono::Datelike;
        self.start.year()..=self.end.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_window_is_rejected() {
        let err = DateWindow::new(date(2025, 5, 1), date(2025, 4, 1)).unwrap_err();
        assert_eq!(
            err,
            CoreError::ReversedWindow {
                start: date(2025, 5, 1),
                end: date(2025, 4, 1)
            }
        );
    }

    #[test]
    fn single_day_window_is_valid() {
        let window = DateWindow::new(date(2025, 3, 18), date(2025, 3, 18)).unwrap();
        assert_eq!(window.start, window.end);
        assert_eq!(window.seasons().collect::<Vec<_>>(), vec![2025]);
    }

    #[test]
    fn window_spanning_new_year_touches_two_seasons() {
        let window = DateWindow::new(date(2024, 10, 1), date(2025, 4, 1)).unwrap();
        assert_eq!(window.seasons().collect::<Vec<_>>(), vec![2024, 2025]);
    }

    #[test]
    fn player_id_displays_and_serializes_as_a_bare_number() {
        let id = PlayerId(660271);
        assert_eq!(id.to_string(), "660271");
        assert_eq!(serde_json::to_string(&id).unwrap(), "660271");
    }

    #[test]
    fn month_day_label() {
        let event = HomeRunEvent {
            sequence_number: 1,
            date: date(2025, 3, 18),
            home_team: "CHC".into(),
            away_team: "LAD".into(),
            pitcher_name: String::new(),
        };
        assert_eq!(event.month_day(), "03-18");
    }
}
