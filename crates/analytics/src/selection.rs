use crate::error::SelectionError;
use configuration::DefaultPlayer;
use core_types::RosterEntry;

/// Picks players out of the active roster list by name and team.
#[derive(Debug, Clone)]
pub struct PlayerSelection {
    entries: Vec<RosterEntry>,
}

impl PlayerSelection {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Distinct team abbreviations, sorted.
    pub fn teams(&self) -> Vec<String> {
        let mut teams: Vec<String> = self.entries.iter().map(|e| e.team.clone()).collect();
        teams.sort();
        teams.dedup();
        teams
    }

    /// The players of one team, in roster order.
    pub fn players_on<'a>(&'a self, team: &'a str) -> impl Iterator<Item = &'a RosterEntry> + 'a {
        self.entries.iter().filter(move |e| e.team == team)
    }

    /// Resolves the player to chart.
    ///
    /// A named player must exist (on `team`, when one is given). With no name,
    /// the configured default is used if they play for the chosen team, or
    /// else that team's first listed player.
    pub fn choose(
        &self,
        name: Option<&str>,
        team: Option<&str>,
        default: &DefaultPlayer,
    ) -> Result<&RosterEntry, SelectionError> {
        match name {
            Some(name) => self
                .entries
                .iter()
                .filter(|e| team.is_none_or(|t| e.team == t))
                .find(|e| e.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| SelectionError::UnknownPlayer {
                    name: name.to_string(),
                    team: team.map(str::to_string),
                }),
            None => {
                let team = team.unwrap_or(&default.team);
                let mut roster = self.entries.iter().filter(|e| e.team == team);
                let first = roster.clone().next();
                roster
                    .find(|e| e.name == default.name)
                    .or(first)
                    .ok_or_else(|| SelectionError::EmptyTeam(team.to_string()))
            }
        }
    }
}
