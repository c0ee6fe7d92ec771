mod common;

use bsa_terminal::state::{AppState, Tab};
use bsa_terminal::ui;
use bsa_terminal::views::{build_fixtures, build_scorers, build_season_snapshot, build_standings};
use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use common::{down, ok};

fn screen_text(state: &AppState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui::draw(f, state)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn loaded_state() -> AppState {
    let mut state = AppState::new(NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date"));
    state.snapshot = build_season_snapshot(
        &ok("competition.json"),
        &ok("standings.json"),
        &ok("scorers.json"),
    );
    state.set_fixtures(build_fixtures(&ok("matches_day.json")));
    state.set_standings(build_standings(&ok("standings.json")));
    state.set_scorers(build_scorers(&ok("scorers.json")));
    state
}

#[test]
fn fixtures_tab_shows_summary_and_cards() {
    let text = screen_text(&loaded_state());
    assert!(text.contains("29 / 38"));
    assert!(text.contains("Palmeiras"));
    assert!(text.contains("Finalizado"));
    assert!(text.contains("3 - 2"));
    assert!(text.contains("INICIADO"));
    assert!(text.contains("Football-Data.org"));
}

#[test]
fn standings_tab_shows_header_and_legend() {
    let mut state = loaded_state();
    state.select_tab(Tab::Standings);
    let text = screen_text(&state);
    assert!(text.contains("Clube"));
    assert!(text.contains("PTS"));
    assert!(text.contains("Legenda"));
    assert!(text.contains("Libertadores"));
}

#[test]
fn empty_states_render_warnings() {
    let mut state = AppState::new(NaiveDate::from_ymd_opt(2025, 10, 20).expect("valid date"));
    state.set_fixtures(build_fixtures(&down()));
    let text = screen_text(&state);
    assert!(text.contains("Nenhum jogo encontrado"));
    assert!(text.contains("- / 38"));

    state.select_tab(Tab::Scorers);
    assert!(screen_text(&state).contains("Nenhum dado de artilheiro"));
}

#[test]
fn help_overlay_is_in_portuguese() {
    let mut state = loaded_state();
    state.help_overlay = true;
    let text = screen_text(&state);
    assert!(text.contains("j/k ou ↑/↓"));
    assert!(!text.contains(" or "));
}
