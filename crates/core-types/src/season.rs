use crate::error::CoreError;
use crate::structs::DateWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which calendar dates count as real games for a team.
///
/// Most teams start on `regular_season_start`. A handful of teams open the
/// season abroad a week or so earlier; those are listed in `excepted_teams`
/// and their opener dates in `special_opening_dates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindowPolicy {
    pub regular_season_start: NaiveDate,
    #[serde(default)]
    pub special_opening_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub excepted_teams: BTreeSet<String>,
}

impl SeasonWindowPolicy {
    pub fn is_excepted(&self, team: &str) -> bool {
        self.excepted_teams.contains(team)
    }

    /// Returns true if a record dated `date` counts for a player on `team`.
    ///
    /// Independent of whatever range the caller queried the source with.
    pub fn is_eligible(&self, team: &str, date: NaiveDate) -> bool {
        (self.is_excepted(team) && self.special_opening_dates.contains(&date))
            || date >= self.regular_season_start
    }

    /// The earliest date any team can have an eligible game.
    pub fn earliest_opening(&self) -> NaiveDate {
        self.special_opening_dates
            .first()
            .copied()
            .filter(|d| *d < self.regular_season_start)
            .unwrap_or(self.regular_season_start)
    }

    /// The query window for optional caller bounds.
    ///
    /// Defaults to the earliest opener through `today`.
    pub fn window(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<DateWindow, CoreError> {
        DateWindow::new(
            start.unwrap_or_else(|| self.earliest_opening()),
            end.unwrap_or(today),
        )
    }

    /// A notice for windows that start before the team's first real game.
    pub fn advisory(&self, player_name: &str, team: &str, start: NaiveDate) -> Option<String> {
        if self.is_excepted(team) || start >= self.regular_season_start {
            return None;
        }
        Some(format!(
            "No official MLB games for {} ({}) before {}.",
            player_name,
            team,
            self.regular_season_start.format("%Y-%m-%d")
        ))
    }
}

impl Default for SeasonWindowPolicy {
    /// The 2025 season: Tokyo Series (LAD vs CHC) on March 18-19, everyone else from March 27.
    fn default() -> Self {
        Self {
            regular_season_start: NaiveDate::from_ymd_opt(2025, 3, 27).unwrap_or_default(),
            special_opening_dates: [(2025, 3, 18), (2025, 3, 19)]
                .into_iter()
                .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
                .collect(),
            excepted_teams: ["LAD", "CHC"].into_iter().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn regular_team_has_nothing_before_opening_day() {
        let policy = SeasonWindowPolicy::default();
        assert!(!policy.is_eligible("NYY", date(2025, 3, 18)));
        assert!(!policy.is_eligible("NYY", date(2025, 3, 26)));
        assert!(policy.is_eligible("NYY", date(2025, 3, 27)));
    }

    #[test]
    fn excepted_team_counts_its_opener_dates_only() {
        let policy = SeasonWindowPolicy::default();
        assert!(policy.is_eligible("LAD", date(2025, 3, 18)));
        assert!(policy.is_eligible("CHC", date(2025, 3, 19)));
        // Exhibition games between the opener and opening day still don't count.
        assert!(!policy.is_eligible("LAD", date(2025, 3, 22)));
    }

    #[test]
    fn opening_day_counts_once_for_excepted_team_listing_it_as_special() {
        let mut policy = SeasonWindowPolicy::default();
        policy.special_opening_dates.insert(date(2025, 3, 27));
        assert!(policy.is_eligible("LAD", date(2025, 3, 27)));
        assert!(policy.is_eligible("NYY", date(2025, 3, 27)));
    }

    #[test]
    fn extending_the_exception_list_needs_no_code_change() {
        let mut policy = SeasonWindowPolicy::default();
        assert!(!policy.is_eligible("SEA", date(2025, 3, 18)));
        policy.excepted_teams.insert("SEA".to_string());
        assert!(policy.is_eligible("SEA", date(2025, 3, 18)));
    }

    #[test]
    fn advisory_only_for_regular_teams_starting_early() {
        let policy = SeasonWindowPolicy::default();
        assert_eq!(
            policy.advisory("Aaron Judge", "NYY", date(2025, 3, 18)).as_deref(),
            Some("No official MLB games for Aaron Judge (NYY) before 2025-03-27.")
        );
        assert_eq!(policy.advisory("Aaron Judge", "NYY", date(2025, 3, 27)), None);
        assert_eq!(policy.advisory("Shohei Ohtani", "LAD", date(2025, 3, 18)), None);
    }

    #[test]
    fn window_defaults_to_opener_through_today() {
        let policy = SeasonWindowPolicy::default();
        let window = policy.window(None, None, date(2025, 6, 1)).unwrap();
        assert_eq!(window.start, date(2025, 3, 18));
        assert_eq!(window.end, date(2025, 6, 1));

        assert!(policy.window(Some(date(2025, 7, 1)), None, date(2025, 6, 1)).is_err());
    }

    #[test]
    fn earliest_opening_prefers_special_dates() {
        let mut policy = SeasonWindowPolicy::default();
        assert_eq!(policy.earliest_opening(), date(2025, 3, 18));
        policy.special_opening_dates.clear();
        assert_eq!(policy.earliest_opening(), date(2025, 3, 27));
    }
}
