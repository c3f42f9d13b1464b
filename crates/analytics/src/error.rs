use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No active player named {name:?}{}", on_team(.team))]
    UnknownPlayer { name: String, team: Option<String> },

    #[error("Team {0:?} has no active players")]
    EmptyTeam(String),
}

fn on_team(team: &Option<String>) -> String {
    team.as_ref().map(|t| format!(" on {t}")).unwrap_or_default()
}
