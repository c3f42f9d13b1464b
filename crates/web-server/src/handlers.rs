use crate::{error::AppError, AppState};
use analytics::{ChartSeries, Comparison, PaceReport, PlayerSelection};
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use core_types::{DateWindow, RosterEntry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct TeamFilter {
    pub team: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaceQuery {
    pub player: Option<String>,
    pub team: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub player1: Option<String>,
    pub team1: Option<String>,
    pub player2: Option<String>,
    pub team2: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct PlayerPace {
    pub report: PaceReport,
    pub series: ChartSeries,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub players: [PlayerPace; 2],
    /// Null unless both players have at least one home run.
    pub comparison: Option<Comparison>,
}

impl AppState {
    async fn selection(&self) -> Result<PlayerSelection, AppError> {
        Ok(PlayerSelection::new(self.roster.list_active_players().await?))
    }

    fn window(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<DateWindow, AppError> {
        Ok(self
            .deriver
            .policy()
            .window(start, end, Utc::now().date_naive())?)
    }

    async fn pace(&self, player: &RosterEntry, window: DateWindow, color: &str) -> PlayerPace {
        let report = PaceReport::build(&self.deriver, player, window).await;
        let series = report.chart_series(color);
        PlayerPace { report, series }
    }
}

/// # GET /api/teams
pub async fn get_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.selection().await?.teams()))
}

/// # GET /api/players?team=LAD
/// Lists active players, optionally for one team only.
pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TeamFilter>,
) -> Result<Json<Vec<RosterEntry>>, AppError> {
    let selection = state.selection().await?;
    let players = match filter.team.as_deref() {
        Some(team) => selection.players_on(team).cloned().collect(),
        None => selection.entries().to_vec(),
    };
    Ok(Json(players))
}

/// # GET /api/pace?player=..&team=..&start=..&end=..
pub async fn get_pace(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PaceQuery>,
) -> Result<Json<PlayerPace>, AppError> {
    let window = state.window(query.start, query.end)?;
    let selection = state.selection().await?;
    let player = selection.choose(
        query.player.as_deref(),
        query.team.as_deref(),
        &state.display.default_player1,
    )?;

    tracing::info!(player = %player.name, team = %player.team, "Deriving pace.");
    Ok(Json(state.pace(player, window, &state.display.player1_color).await))
}

/// # GET /api/compare?player1=..&player2=..&start=..&end=..
/// Both players' paces plus the head-to-head overlay.
pub async fn get_compare(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<CompareResponse>, AppError> {
    let window = state.window(query.start, query.end)?;
    let selection = state.selection().await?;
    let first = selection.choose(
        query.player1.as_deref(),
        query.team1.as_deref(),
        &state.display.default_player1,
    )?;
    let second = selection.choose(
        query.player2.as_deref(),
        query.team2.as_deref(),
        &state.display.default_player2,
    )?;

    tracing::info!(first = %first.name, second = %second.name, "Deriving comparison.");
    let first = state.pace(first, window, &state.display.player1_color).await;
    let second = state.pace(second, window, &state.display.player2_color).await;
    let comparison = Comparison::from_reports(&first.report, &second.report);

    Ok(Json(CompareResponse {
        players: [first, second],
        comparison,
    }))
}
