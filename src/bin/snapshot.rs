use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use bsa_terminal::config::Config;
use bsa_terminal::dashboard::Dashboard;
use bsa_terminal::logging::init_tracing;
use bsa_terminal::views::{
    FIXTURES_EMPTY, FixturesView, SCORERS_EMPTY, STANDINGS_UNAVAILABLE, ScorersView,
    StandingsView, count_text,
};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = Config::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    // SNAPSHOT_DATE=YYYY-MM-DD picks the fixtures day; default is today.
    let date = match std::env::var("SNAPSHOT_DATE") {
        Ok(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid SNAPSHOT_DATE {raw:?}"))?,
        _ => Local::now().date_naive(),
    };

    let mut dashboard = Dashboard::from_config(&config);

    let snap = dashboard.summary();
    println!(
        "Rodada {} / {} | Líder: {} ({} pts) | Artilheiro: {} ({}) {} gols",
        snap.matchday,
        snap.total_rounds,
        snap.leader_name,
        snap.leader_points,
        snap.scorer_name,
        snap.scorer_team,
        snap.scorer_goals
    );
    println!(
        "Ao vivo: {}",
        if dashboard.has_live_match() { "sim" } else { "não" }
    );

    println!("\n== Jogos {date} ==");
    match dashboard.fixtures_on(date) {
        FixturesView::Empty => println!("{FIXTURES_EMPTY}"),
        FixturesView::Matches(cards) => {
            for card in cards {
                println!(
                    "{:>24} {} - {} {:<24} [{}]",
                    card.home, card.score_home, card.score_away, card.away, card.label
                );
            }
        }
    }

    println!("\n== Classificação ==");
    match dashboard.standings() {
        StandingsView::Unavailable => println!("{STANDINGS_UNAVAILABLE}"),
        StandingsView::Table(lines) => {
            for line in lines {
                let row = &line.row;
                println!(
                    "{:>2} {:<28} {:>3} pts  J{:>3} V{:>3} E{:>3} D{:>3} SG{:>4}  {:?}",
                    row.position,
                    row.team.name,
                    count_text(row.points),
                    row.played,
                    row.won,
                    row.drawn,
                    row.lost,
                    row.goal_difference,
                    line.band
                );
            }
        }
    }

    println!("\n== Artilheiros ==");
    match dashboard.scorers() {
        ScorersView::Empty => println!("{SCORERS_EMPTY}"),
        ScorersView::Ranked(cards) => {
            for card in cards {
                println!(
                    "{:>2} {} {:<28} {:<24} {}",
                    card.rank,
                    card.medal.icon(),
                    card.player,
                    card.team,
                    card.goals
                );
            }
        }
    }

    Ok(())
}
