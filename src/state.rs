use std::collections::VecDeque;

use chrono::{Duration as ChronoDuration, NaiveDate};

use crate::views::{FixturesView, ScorersView, SeasonSnapshot, StandingsView};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Fixtures,
    Standings,
    Scorers,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Fixtures, Tab::Standings, Tab::Scorers];

    pub fn index(self) -> usize {
        match self {
            Tab::Fixtures => 0,
            Tab::Standings => 1,
            Tab::Scorers => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub tab: Tab,
    pub today: NaiveDate,
    pub date: NaiveDate,
    pub snapshot: SeasonSnapshot,
    pub live: bool,
    pub fixtures: FixturesView,
    pub standings: StandingsView,
    pub scorers: ScorersView,
    pub scroll: [usize; 3],
    pub loading: bool,
    pub updated: Option<String>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tab: Tab::Fixtures,
            today,
            date: today,
            snapshot: SeasonSnapshot::default(),
            live: false,
            fixtures: FixturesView::Empty,
            standings: StandingsView::Unavailable,
            scorers: ScorersView::Empty,
            scroll: [0; 3],
            loading: false,
            updated: None,
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        let idx = (self.tab.index() + 1) % Tab::ALL.len();
        self.tab = Tab::ALL[idx];
    }

    pub fn prev_tab(&mut self) {
        let idx = (self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.tab = Tab::ALL[idx];
    }

    pub fn tab_title(&self, tab: Tab) -> &'static str {
        match tab {
            Tab::Fixtures if self.live => "📅 Jogos do Dia 🔴",
            Tab::Fixtures => "📅 Jogos do Dia",
            Tab::Standings => "📊 Classificação",
            Tab::Scorers => "🏅 Artilheiros",
        }
    }

    /// Moves the date picker; the caller refetches fixtures for the new day.
    pub fn shift_date(&mut self, days: i64) {
        if let Some(date) = self.date.checked_add_signed(ChronoDuration::days(days)) {
            self.set_date(date);
        }
    }

    pub fn reset_date(&mut self) {
        self.set_date(self.today);
    }

    fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.scroll[Tab::Fixtures.index()] = 0;
    }

    pub fn set_fixtures(&mut self, fixtures: FixturesView) {
        self.fixtures = fixtures;
        self.clamp_scroll(Tab::Fixtures);
    }

    pub fn set_standings(&mut self, standings: StandingsView) {
        self.standings = standings;
        self.clamp_scroll(Tab::Standings);
    }

    pub fn set_scorers(&mut self, scorers: ScorersView) {
        self.scorers = scorers;
        self.clamp_scroll(Tab::Scorers);
    }

    pub fn row_count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Fixtures => match &self.fixtures {
                FixturesView::Matches(cards) => cards.len(),
                FixturesView::Empty => 0,
            },
            Tab::Standings => match &self.standings {
                StandingsView::Table(lines) => lines.len(),
                StandingsView::Unavailable => 0,
            },
            Tab::Scorers => match &self.scorers {
                ScorersView::Ranked(cards) => cards.len(),
                ScorersView::Empty => 0,
            },
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll[self.tab.index()]
    }

    pub fn scroll_down(&mut self) {
        let idx = self.tab.index();
        let max = self.row_count(self.tab).saturating_sub(1);
        self.scroll[idx] = (self.scroll[idx] + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        let idx = self.tab.index();
        self.scroll[idx] = self.scroll[idx].saturating_sub(1);
    }

    fn clamp_scroll(&mut self, tab: Tab) {
        let max = self.row_count(tab).saturating_sub(1);
        let idx = tab.index();
        self.scroll[idx] = self.scroll[idx].min(max);
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}
