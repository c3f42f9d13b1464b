use analytics::{Comparison, PaceReport};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use core_types::{HomeRunEvent, RosterEntry, Team};

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

/// The per-player home run log: HR No, MM-DD, home, away, pitcher.
pub fn home_run_table(events: &[HomeRunEvent]) -> Table {
    let mut table = new_table(&["HR No", "MM-DD", "Home", "Away", "Pitcher"]);
    for event in events {
        table.add_row(vec![
            Cell::new(event.sequence_number).set_alignment(CellAlignment::Right),
            Cell::new(event.month_day()),
            Cell::new(&event.home_team),
            Cell::new(&event.away_team),
            Cell::new(&event.pitcher_name),
        ]);
    }
    table
}

pub fn team_table(teams: &[Team]) -> Table {
    let mut table = new_table(&["Team", "Name"]);
    for team in teams {
        table.add_row(vec![Cell::new(&team.abbreviation), Cell::new(&team.name)]);
    }
    table
}

pub fn roster_table(players: &[&RosterEntry]) -> Table {
    let mut table = new_table(&["Player", "ID", "Team"]);
    for player in players {
        table.add_row(vec![
            Cell::new(&player.name),
            Cell::new(player.player_id).set_alignment(CellAlignment::Right),
            Cell::new(&player.team),
        ]);
    }
    table
}

pub fn print_report(report: &PaceReport) {
    println!("\n{} ({})", report.player, report.team);
    println!("{}", report.headshot_url);
    if let Some(advisory) = &report.advisory {
        println!("⚠️  {}", advisory);
    }
    if report.is_empty() {
        println!("No HR data in selected period.");
        return;
    }
    println!("{}", home_run_table(&report.events));
    println!("Cumulative HRs: {}", report.total());
}

/// The overlaid logs, one row per home run, each with its own player's count.
pub fn print_comparison(comparison: &Comparison) {
    println!("\nHead-to-Head Comparison");
    let mut table = new_table(&["Player", "Date", "HR No", "Pitcher"]);
    for tagged in &comparison.events {
        table.add_row(vec![
            Cell::new(&tagged.player),
            Cell::new(tagged.event.date),
            Cell::new(tagged.event.sequence_number).set_alignment(CellAlignment::Right),
            Cell::new(&tagged.event.pitcher_name),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn table_shows_month_day_and_empty_pitcher() {
        let events = vec![HomeRunEvent {
            sequence_number: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 18).unwrap(),
            home_team: "CHC".into(),
            away_team: "LAD".into(),
            pitcher_name: String::new(),
        }];

        let rendered = home_run_table(&events).to_string();

        assert!(rendered.contains("HR No"));
        assert!(rendered.contains("03-18"));
        assert!(rendered.contains("CHC"));
    }

    #[test]
    fn team_table_lists_code_and_name() {
        let teams = vec![Team {
            id: 119,
            name: "Los Angeles Dodgers".into(),
            abbreviation: "LAD".into(),
        }];

        let rendered = team_table(&teams).to_string();

        assert!(rendered.contains("LAD"));
        assert!(rendered.contains("Los Angeles Dodgers"));
    }
}
