mod common;

use std::time::Duration;

use bsa_terminal::fetch::FetchOutcome;
use bsa_terminal::football_data::Endpoints;
use bsa_terminal::http_cache::{ManualClock, ResponseCache};
use bsa_terminal::live::{any_live, has_live_match};
use serde_json::json;

use common::{ScriptedFetcher, down, ok};

fn endpoints() -> Endpoints {
    Endpoints::new("https://api.test/v4", "BSA")
}

#[test]
fn live_when_any_match_is_live() {
    let fetcher = ScriptedFetcher::new();
    fetcher.respond(endpoints().matches(), ok("matches_day.json"));
    let mut cache = ResponseCache::with_clock(fetcher.clone(), ManualClock::new(), Duration::from_secs(300));

    assert!(has_live_match(&mut cache, &endpoints()));
    assert_eq!(fetcher.calls(), vec![endpoints().matches()]);
}

#[test]
fn not_live_when_no_status_is_exactly_live() {
    let payload = json!({
        "matches": [
            {"status": "FINISHED", "homeTeam": {"name": "A"}, "awayTeam": {"name": "B"}},
            {"status": "IN_PLAY", "homeTeam": {"name": "C"}, "awayTeam": {"name": "D"}},
            {"status": "SCHEDULED", "homeTeam": {"name": "E"}, "awayTeam": {"name": "F"}}
        ]
    });
    assert!(!any_live(&FetchOutcome::Success(payload)));
}

#[test]
fn not_live_on_failure_or_missing_list() {
    assert!(!any_live(&down()));
    assert!(!any_live(&FetchOutcome::Success(json!({}))));
    assert!(!any_live(&ok("matches_empty.json")));

    let fetcher = ScriptedFetcher::new();
    let mut cache = ResponseCache::with_clock(fetcher, ManualClock::new(), Duration::from_secs(300));
    assert!(!has_live_match(&mut cache, &endpoints()));
}

#[test]
fn live_even_when_a_sibling_match_is_incomplete() {
    let payload = json!({
        "matches": [
            {"status": "LIVE", "homeTeam": {"name": "Bahia"}, "awayTeam": {"name": "Vitória"}},
            {"status": "SCHEDULED", "homeTeam": {"name": "Grêmio"}},
            {"homeTeam": {"name": "Ceará"}, "awayTeam": {"name": "Juventude"}}
        ]
    });
    assert!(any_live(&FetchOutcome::Success(payload)));
}
