use analytics::{Comparison, HomeRunPaceDeriver, PaceReport, PlayerSelection};
use anyhow::Context;
use api_client::{CachedRosterDirectory, RosterDirectory, StatsApiClient};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use configuration::{init_tracing, load_config, Config, LogFormat};
use core_types::{DateWindow, RosterEntry};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use web_server::handlers::{CompareResponse, PlayerPace};
use web_server::AppState;

mod display;

/// The main entry point for the home run pace tracker.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // PACE__* overrides may live in a .env file; it's optional.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = init_tracing(&config.logging, cli.verbose)?;

    let tracker = Tracker::new(config)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Teams => tracker.teams().await,
        Commands::Roster { team } => tracker.roster(&team).await,
        Commands::Pace(args) => tracker.pace(args).await,
        Commands::Compare(args) => tracker.compare(args).await,
        Commands::Serve { addr } => tracker.serve(addr).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Compare MLB players' cumulative home run pace over a season.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Missing files fall back to defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Override the configured log format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the active MLB teams.
    Teams,
    /// List a team's active players.
    Roster {
        /// Team abbreviation (e.g., "LAD").
        #[arg(long)]
        team: String,
    },
    /// Show one player's home run log.
    Pace(PaceArgs),
    /// Show two players' logs and their head-to-head overlay.
    Compare(CompareArgs),
    /// Serve the JSON API.
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: SocketAddr,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args)]
struct WindowArgs {
    /// First date to query (format: YYYY-MM-DD). Defaults to the earliest opener.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last date to query (format: YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    to: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

#[derive(Args)]
struct PaceArgs {
    /// Player's full name (e.g., "Shohei Ohtani"). Defaults to the configured first player.
    #[arg(long)]
    player: Option<String>,

    /// Team abbreviation used to pick the player and the season rule.
    #[arg(long)]
    team: Option<String>,

    #[command(flatten)]
    window: WindowArgs,
}

#[derive(Args)]
struct CompareArgs {
    #[arg(long)]
    player1: Option<String>,
    #[arg(long)]
    team1: Option<String>,
    #[arg(long)]
    player2: Option<String>,
    #[arg(long)]
    team2: Option<String>,

    #[command(flatten)]
    window: WindowArgs,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Wires the Stats API client into the roster cache and the deriver.
struct Tracker {
    config: Config,
    roster: Arc<CachedRosterDirectory<StatsApiClient>>,
    deriver: HomeRunPaceDeriver,
}

impl Tracker {
    fn new(config: Config) -> anyhow::Result<Self> {
        let client = StatsApiClient::new(&config.api).context("building the Stats API client")?;
        let roster = Arc::new(CachedRosterDirectory::new(
            client.clone(),
            config.roster.cache_ttl(),
        ));
        let client = Arc::new(client);
        let deriver = HomeRunPaceDeriver::new(client.clone(), client, config.season.clone());

        Ok(Self {
            config,
            roster,
            deriver,
        })
    }

    async fn selection(&self) -> anyhow::Result<PlayerSelection> {
        let players = self
            .roster
            .list_active_players()
            .await
            .context("fetching active rosters")?;
        Ok(PlayerSelection::new(players))
    }

    fn window(&self, args: &WindowArgs) -> anyhow::Result<DateWindow> {
        let today = Utc::now().date_naive();
        Ok(self.config.season.window(args.from, args.to, today)?)
    }

    async fn teams(&self) -> anyhow::Result<()> {
        let mut teams = self.roster.list_teams().await.context("fetching teams")?;
        teams.sort_by(|a, b| a.abbreviation.cmp(&b.abbreviation));
        println!("{}", display::team_table(&teams));
        Ok(())
    }

    async fn roster(&self, team: &str) -> anyhow::Result<()> {
        let selection = self.selection().await?;
        let players: Vec<&RosterEntry> = selection.players_on(team).collect();
        if players.is_empty() {
            anyhow::bail!("No active players found for team {team:?}");
        }
        println!("{}", display::roster_table(&players));
        Ok(())
    }

    async fn pace(&self, args: PaceArgs) -> anyhow::Result<()> {
        let window = self.window(&args.window)?;
        let selection = self.selection().await?;
        let player = selection.choose(
            args.player.as_deref(),
            args.team.as_deref(),
            &self.config.display.default_player1,
        )?;

        let pace = self.player_pace(player, window, &self.config.display.player1_color).await;

        match args.window.format {
            OutputFormat::Table => display::print_report(&pace.report),
            OutputFormat::Json => print_json(&pace)?,
        }
        Ok(())
    }

    async fn compare(&self, args: CompareArgs) -> anyhow::Result<()> {
        let window = self.window(&args.window)?;
        let selection = self.selection().await?;
        let display = &self.config.display;
        let first = selection.choose(
            args.player1.as_deref(),
            args.team1.as_deref(),
            &display.default_player1,
        )?;
        let second = selection.choose(
            args.player2.as_deref(),
            args.team2.as_deref(),
            &display.default_player2,
        )?;

        let first = self.player_pace(first, window, &display.player1_color).await;
        let second = self.player_pace(second, window, &display.player2_color).await;
        let comparison = Comparison::from_reports(&first.report, &second.report);

        match args.window.format {
            OutputFormat::Table => {
                display::print_report(&first.report);
                display::print_report(&second.report);
                if let Some(comparison) = &comparison {
                    display::print_comparison(comparison);
                }
            }
            OutputFormat::Json => print_json(&CompareResponse {
                players: [first, second],
                comparison,
            })?,
        }
        Ok(())
    }

    async fn player_pace(&self, player: &RosterEntry, window: DateWindow, color: &str) -> PlayerPace {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Fetching {} ({})...", player.name, player.team));
        spinner.enable_steady_tick(Duration::from_millis(100));

        tracing::info!(player = %player.name, team = %player.team, from = %window.start, to = %window.end, "Deriving pace.");
        let report = PaceReport::build(&self.deriver, player, window).await;
        spinner.finish_and_clear();

        let series = report.chart_series(color);
        PlayerPace { report, series }
    }

    async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        let state = AppState {
            deriver: self.deriver,
            roster: self.roster,
            display: self.config.display,
        };
        web_server::run_server(addr, state).await
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
