use chrono::NaiveDate;
use tracing::info;

use crate::config::Config;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::football_data::Endpoints;
use crate::http_cache::{Clock, ResponseCache, SystemClock};
use crate::live;
use crate::state::AppState;
use crate::views::{
    FixturesView, ScorersView, SeasonSnapshot, StandingsView, build_fixtures, build_scorers,
    build_season_snapshot, build_standings,
};

/// Drives one render cycle: every read goes through the shared cache.
pub struct Dashboard<F, C = SystemClock> {
    cache: ResponseCache<F, C>,
    endpoints: Endpoints,
}

impl Dashboard<HttpFetcher, SystemClock> {
    pub fn from_config(config: &Config) -> Self {
        let fetcher = HttpFetcher::new(config.api_key.clone(), config.request_timeout);
        let cache = ResponseCache::new(fetcher, config.cache_ttl).cache_failures(config.cache_failures);
        Self::new(cache, Endpoints::new(&config.base_url, &config.competition))
    }
}

impl<F: Fetcher, C: Clock> Dashboard<F, C> {
    pub fn new(cache: ResponseCache<F, C>, endpoints: Endpoints) -> Self {
        Self { cache, endpoints }
    }

    pub fn summary(&mut self) -> SeasonSnapshot {
        let competition = self.cache.get(&self.endpoints.competition());
        let standings = self.cache.get(&self.endpoints.standings());
        let scorers = self.cache.get(&self.endpoints.scorers());
        build_season_snapshot(&competition, &standings, &scorers)
    }

    pub fn has_live_match(&mut self) -> bool {
        live::has_live_match(&mut self.cache, &self.endpoints)
    }

    pub fn fixtures_on(&mut self, date: NaiveDate) -> FixturesView {
        build_fixtures(&self.cache.get(&self.endpoints.matches_on(date)))
    }

    pub fn standings(&mut self) -> StandingsView {
        build_standings(&self.cache.get(&self.endpoints.standings()))
    }

    pub fn scorers(&mut self) -> ScorersView {
        build_scorers(&self.cache.get(&self.endpoints.scorers()))
    }

    /// Summary panel, live flag, then the three tabs, in that order.
    pub fn refresh_all(&mut self, state: &mut AppState) {
        state.snapshot = self.summary();
        state.live = self.has_live_match();
        self.refresh_fixtures(state);

        let standings = self.standings();
        if standings == StandingsView::Unavailable {
            state.push_log("[WARN] Standings unavailable");
        }
        state.set_standings(standings);

        let scorers = self.scorers();
        if scorers == ScorersView::Empty {
            state.push_log("[WARN] Scorers unavailable");
        }
        state.set_scorers(scorers);

        info!(
            cached = self.cache.len(),
            ttl_secs = self.cache.ttl().as_secs(),
            live = state.live,
            "dashboard refreshed"
        );
    }

    pub fn refresh_fixtures(&mut self, state: &mut AppState) {
        let fixtures = self.fixtures_on(state.date);
        match &fixtures {
            FixturesView::Matches(cards) => {
                state.push_log(format!("[INFO] {} match(es) on {}", cards.len(), state.date))
            }
            FixturesView::Empty => state.push_log(format!("[INFO] No matches on {}", state.date)),
        }
        state.set_fixtures(fixtures);
    }

    pub fn invalidate(&mut self) {
        self.cache.invalidate_all();
    }

    pub fn cache(&self) -> &ResponseCache<F, C> {
        &self.cache
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
