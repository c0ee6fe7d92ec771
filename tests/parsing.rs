mod common;

use bsa_terminal::football_data::{
    Endpoints, MatchStatus, parse_matches_json, parse_scorers_json, parse_standings_json,
};
use chrono::NaiveDate;

use common::read_fixture;

#[test]
fn parses_matches_fixture() {
    let matches = parse_matches_json(&read_fixture("matches_day.json")).expect("fixture should parse");
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].home.name, "Palmeiras");
    assert_eq!(matches[0].away.crest, "https://crests.football-data.org/1783.png");
    assert_eq!(matches[0].score_home, Some(3));
    assert_eq!(matches[1].status, MatchStatus::Live);
    assert_eq!(matches[2].status, MatchStatus::Scheduled);
    assert_eq!(matches[2].raw_status, "TIMED");
    assert_eq!(matches[2].score_home, None);
}

#[test]
fn parses_standings_fixture() {
    let rows = parse_standings_json(&read_fixture("standings.json")).expect("fixture should parse");
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[19].team.name, "Sport Recife");
    assert_eq!(rows[19].position, 20);
}

#[test]
fn parses_scorers_fixture() {
    let scorers = parse_scorers_json(&read_fixture("scorers.json")).expect("fixture should parse");
    assert_eq!(scorers.len(), 25);
    assert_eq!(scorers[0].goals, Some(22));
    assert_eq!(scorers[0].team.name, "Palmeiras");
}

#[test]
fn null_payloads_are_empty() {
    assert!(parse_matches_json("null").expect("null should parse").is_empty());
    assert!(parse_standings_json("").expect("empty should parse").is_empty());
    assert!(parse_scorers_json("null").expect("null should parse").is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_matches_json("{not json").is_err());
}

#[test]
fn status_strings_map_to_three_states() {
    assert_eq!(MatchStatus::from_api("LIVE"), MatchStatus::Live);
    assert_eq!(MatchStatus::from_api("FINISHED"), MatchStatus::Finished);
    assert_eq!(MatchStatus::from_api("SCHEDULED"), MatchStatus::Scheduled);
    assert_eq!(MatchStatus::from_api("POSTPONED"), MatchStatus::Scheduled);
}

#[test]
fn endpoint_urls() {
    let endpoints = Endpoints::new("https://api.football-data.org/v4/", "BSA");
    assert_eq!(endpoints.competition(), "https://api.football-data.org/v4/competitions/BSA");
    assert_eq!(endpoints.standings(), "https://api.football-data.org/v4/competitions/BSA/standings");
    assert_eq!(endpoints.scorers(), "https://api.football-data.org/v4/competitions/BSA/scorers");
    assert_eq!(endpoints.matches(), "https://api.football-data.org/v4/competitions/BSA/matches");
    let date = NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date");
    assert_eq!(
        endpoints.matches_on(date),
        "https://api.football-data.org/v4/competitions/BSA/matches?dateFrom=2025-10-18&dateTo=2025-10-18"
    );
}
