use serde::Deserialize;

// Using `#[serde(rename_all = "camelCase")]` to automatically map from JSON camelCase to Rust snake_case.
// Only the fields we read are declared; the API sends many more.

/// `GET /api/v1/teams?sportId=1`
#[derive(Debug, Clone, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub id: u32,
    pub name: String,
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// `GET /api/v1/teams/{id}/roster?rosterType=active`
#[derive(Debug, Clone, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSlot {
    #[serde(default)]
    pub person: PersonRef,
}

/// A person as embedded in rosters, people lookups and play matchups.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    pub id: Option<u32>,
    pub full_name: Option<String>,
}

/// `GET /api/v1/people/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleResponse {
    #[serde(default)]
    pub people: Vec<PersonRef>,
}

/// `GET /api/v1/people/{id}/stats?stats=gameLog&group=hitting`
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatGroup {
    #[serde(default)]
    pub splits: Vec<GameLogSplit>,
}

/// One game line of a batter's game log.
#[derive(Debug, Clone, Deserialize)]
pub struct GameLogSplit {
    pub date: String,
    pub game: GameRef,
    #[serde(default)]
    pub stat: HittingLine,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRef {
    pub game_pk: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HittingLine {
    #[serde(default)]
    pub home_runs: u32,
}

/// `GET /api/v1.1/game/{gamePk}/feed/live`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFeed {
    pub game_data: GameData,
    #[serde(default)]
    pub live_data: LiveData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameData {
    pub teams: GameTeams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameTeams {
    pub home: TeamAbbreviation,
    pub away: TeamAbbreviation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamAbbreviation {
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub plays: Plays,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    #[serde(default)]
    pub all_plays: Vec<Play>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Play {
    #[serde(default)]
    pub result: PlayResult,
    pub matchup: Matchup,
}

/// `event_type` is missing while a plate appearance is still in progress.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Matchup {
    pub batter: PersonRef,
    pub pitcher: Option<PersonRef>,
}

/// Represents an error response from the Stats API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
}
