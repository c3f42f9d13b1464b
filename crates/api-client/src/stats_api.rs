use crate::error::ApiError;
use crate::responses::{
    ApiErrorResponse, LiveFeed, PeopleResponse, RosterResponse, StatsResponse, TeamsResponse,
};
use crate::{EventLogSource, IdentityResolver, RosterDirectory};
use async_trait::async_trait;
use chrono::NaiveDate;
use configuration::ApiConfig;
use core_types::{DateWindow, EventType, PlateAppearanceRecord, PlayerId, RosterEntry, Team};
use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;

/// Regular season plus every postseason round; spring training is left out.
const GAME_TYPES: &str = "R,F,D,L,W";

/// A concrete client for the public MLB Stats API.
///
/// It backs all three collaborators: team rosters, batter event logs
/// (built from game logs plus live game feeds) and person lookups.
#[derive(Clone)]
pub struct StatsApiClient {
    client: reqwest::Client,
    base_url: String,
    max_concurrent_requests: usize,
    home_run_games_only: bool,
}

/// A game the batter appeared in, as listed by their game log.
#[derive(Debug, Clone, Copy)]
struct GameLogEntry {
    game_pk: u64,
    date: NaiveDate,
}

impl StatsApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("hr-pace/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_concurrent_requests: config.max_concurrent_requests.max(1),
            home_run_games_only: config.home_run_games_only,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&text).map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            // The API usually explains itself in JSON; fall back to the raw body.
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Lists the games in `window` that the batter's plate appearances should be read from.
    async fn game_log(
        &self,
        player_id: PlayerId,
        window: DateWindow,
    ) -> Result<Vec<GameLogEntry>, ApiError> {
        let path = format!("/api/v1/people/{}/stats", player_id);
        let mut games = Vec::new();

        for season in window.seasons() {
            let response: StatsResponse = self
                .get_json(
                    &path,
                    &[
                        ("stats", "gameLog".to_string()),
                        ("group", "hitting".to_string()),
                        ("season", season.to_string()),
                        ("gameType", GAME_TYPES.to_string()),
                        ("startDate", window.start.format("%Y-%m-%d").to_string()),
                        ("endDate", window.end.format("%Y-%m-%d").to_string()),
                    ],
                )
                .await?;

            for split in response.stats.into_iter().flat_map(|group| group.splits) {
                let Ok(date) = NaiveDate::parse_from_str(&split.date, "%Y-%m-%d") else {
                    tracing::warn!(
                        game_pk = split.game.game_pk,
                        date = %split.date,
                        "Skipping game log line with an unreadable date."
                    );
                    continue;
                };
                if self.home_run_games_only && split.stat.home_runs == 0 {
                    continue;
                }
                games.push(GameLogEntry {
                    game_pk: split.game.game_pk,
                    date,
                });
            }
        }

        Ok(games)
    }

    /// Reads the batter's plate appearances out of one game's live feed.
    async fn game_records(
        &self,
        game: GameLogEntry,
        player_id: PlayerId,
    ) -> Result<Vec<PlateAppearanceRecord>, ApiError> {
        let feed: LiveFeed = self
            .get_json(&format!("/api/v1.1/game/{}/feed/live", game.game_pk), &[])
            .await?;

        let home_team = feed.game_data.teams.home.abbreviation;
        let away_team = feed.game_data.teams.away.abbreviation;

        let records = feed
            .live_data
            .plays
            .all_plays
            .into_iter()
            .filter(|play| play.matchup.batter.id == Some(player_id.0))
            .filter_map(|play| {
                let event_type = play.result.event_type?;
                Some(PlateAppearanceRecord {
                    date: game.date,
                    event_type: EventType::from(event_type),
                    pitcher_id: play.matchup.pitcher.and_then(|p| p.id).map(PlayerId),
                    home_team: home_team.clone(),
                    away_team: away_team.clone(),
                })
            })
            .collect();

        Ok(records)
    }
}

#[async_trait]
impl RosterDirectory for StatsApiClient {
    async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        let response: TeamsResponse = self
            .get_json("/api/v1/teams", &[("sportId", "1".to_string())])
            .await?;

        Ok(response
            .teams
            .into_iter()
            .filter(|team| team.active)
            .filter_map(|team| {
                Some(Team {
                    id: team.id,
                    name: team.name,
                    abbreviation: team.abbreviation?,
                })
            })
            .collect())
    }

    async fn list_active_players(&self) -> Result<Vec<RosterEntry>, ApiError> {
        let teams = self.list_teams().await?;

        let team_ids: Vec<u32> = teams.iter().map(|team| team.id).collect();
        let rosters: Vec<Result<RosterResponse, ApiError>> = stream::iter(team_ids)
            .map(|team_id| async move {
                let path = format!("/api/v1/teams/{}/roster", team_id);
                self.get_json(&path, &[("rosterType", "active".to_string())])
                    .await
            })
            .buffered(self.max_concurrent_requests)
            .collect()
            .await;

        let mut entries = Vec::new();
        for (team, roster) in teams.iter().zip(rosters) {
            for slot in roster?.roster {
                if let (Some(name), Some(id)) = (slot.person.full_name, slot.person.id) {
                    entries.push(RosterEntry {
                        name,
                        player_id: PlayerId(id),
                        team: team.abbreviation.clone(),
                    });
                }
            }
        }

        tracing::info!(teams = teams.len(), players = entries.len(), "Fetched active rosters.");
        Ok(entries)
    }
}

#[async_trait]
impl EventLogSource for StatsApiClient {
    async fn fetch(
        &self,
        player_id: PlayerId,
        window: DateWindow,
    ) -> Result<Vec<PlateAppearanceRecord>, ApiError> {
        let games = self.game_log(player_id, window).await?;
        tracing::debug!(%player_id, games = games.len(), "Fetching game feeds.");

        // `buffered` keeps results in game-log order.
        let feeds: Vec<Result<Vec<PlateAppearanceRecord>, ApiError>> = stream::iter(games.clone())
            .map(|game| self.game_records(game, player_id))
            .buffered(self.max_concurrent_requests)
            .collect()
            .await;

        let mut records = Vec::new();
        for (game, feed) in games.iter().zip(feeds) {
            match feed {
                Ok(game_records) => records.extend(game_records),
                Err(e) => {
                    tracing::warn!(game_pk = game.game_pk, error = %e, "Skipping game feed that failed to load.");
                }
            }
        }

        Ok(records)
    }
}

#[async_trait]
impl IdentityResolver for StatsApiClient {
    async fn resolve(&self, person_id: PlayerId) -> Result<String, ApiError> {
        let response: PeopleResponse = self
            .get_json(&format!("/api/v1/people/{}", person_id), &[])
            .await?;

        response
            .people
            .into_iter()
            .next()
            .and_then(|person| person.full_name)
            .ok_or_else(|| ApiError::NotFound(format!("person {}", person_id)))
    }
}
