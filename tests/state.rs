use bsa_terminal::state::{AppState, Tab};
use bsa_terminal::views::{FixturesView, ScorersView};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date")
}

#[test]
fn tabs_cycle_both_ways() {
    let mut state = AppState::new(today());
    assert_eq!(state.tab, Tab::Fixtures);
    state.next_tab();
    assert_eq!(state.tab, Tab::Standings);
    state.next_tab();
    state.next_tab();
    assert_eq!(state.tab, Tab::Fixtures);
    state.prev_tab();
    assert_eq!(state.tab, Tab::Scorers);
}

#[test]
fn fixtures_tab_title_flags_live_matches() {
    let mut state = AppState::new(today());
    assert_eq!(state.tab_title(Tab::Fixtures), "📅 Jogos do Dia");
    state.live = true;
    assert_eq!(state.tab_title(Tab::Fixtures), "📅 Jogos do Dia 🔴");
    assert_eq!(state.tab_title(Tab::Standings), "📊 Classificação");
}

#[test]
fn date_picker_crosses_year_and_resets() {
    let mut state = AppState::new(today());
    state.shift_date(1);
    assert_eq!(state.date, NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"));
    state.shift_date(-3);
    assert_eq!(state.date, NaiveDate::from_ymd_opt(2025, 12, 29).expect("valid date"));
    state.reset_date();
    assert_eq!(state.date, today());
}

#[test]
fn scroll_is_clamped_to_rows() {
    let mut state = AppState::new(today());
    state.select_tab(Tab::Scorers);
    state.scroll_down();
    assert_eq!(state.scroll_offset(), 0);

    state.set_scorers(ScorersView::Ranked(Vec::new()));
    state.scroll_up();
    assert_eq!(state.scroll_offset(), 0);

    state.select_tab(Tab::Fixtures);
    state.scroll[0] = 7;
    state.set_fixtures(FixturesView::Empty);
    assert_eq!(state.scroll_offset(), 0);
}

#[test]
fn logs_are_capped() {
    let mut state = AppState::new(today());
    for i in 0..250 {
        state.push_log(format!("[INFO] {i}"));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] 50"));
}
