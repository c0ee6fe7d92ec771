use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    competition: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>, competition: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            competition: competition.into(),
        }
    }

    pub fn competition(&self) -> String {
        format!("{}/competitions/{}", self.base_url, self.competition)
    }

    pub fn standings(&self) -> String {
        format!("{}/standings", self.competition())
    }

    pub fn scorers(&self) -> String {
        format!("{}/scorers", self.competition())
    }

    pub fn matches(&self) -> String {
        format!("{}/matches", self.competition())
    }

    pub fn matches_on(&self, date: NaiveDate) -> String {
        let day = date.format("%Y-%m-%d");
        format!("{}?dateFrom={day}&dateTo={day}", self.matches())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

impl MatchStatus {
    pub fn from_api(raw: &str) -> Self {
        match raw {
            "LIVE" => MatchStatus::Live,
            "FINISHED" => MatchStatus::Finished,
            _ => MatchStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub name: String,
    pub crest: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub home: TeamRef,
    pub away: TeamRef,
    pub status: MatchStatus,
    pub raw_status: String,
    pub score_home: Option<u32>,
    pub score_away: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub position: u32,
    pub team: TeamRef,
    pub points: Option<i32>,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goal_difference: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerEntry {
    pub player: String,
    pub team: TeamRef,
    pub goals: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CompetitionPayload {
    #[serde(rename = "currentSeason", default)]
    current_season: Option<ApiSeason>,
}

#[derive(Debug, Deserialize)]
struct ApiSeason {
    #[serde(rename = "currentMatchday", default)]
    current_matchday: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct StandingsPayload {
    #[serde(default)]
    standings: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiStandingsGroup {
    #[serde(default)]
    table: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ApiTableRow {
    position: u32,
    team: ApiTeam,
    #[serde(default)]
    points: Option<i32>,
    #[serde(rename = "playedGames", default)]
    played_games: u32,
    #[serde(default)]
    won: u32,
    #[serde(default)]
    draw: u32,
    #[serde(default)]
    lost: u32,
    #[serde(rename = "goalDifference", default)]
    goal_difference: i32,
}

#[derive(Debug, Deserialize)]
struct ScorersPayload {
    #[serde(default)]
    scorers: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiScorer {
    #[serde(default)]
    player: ApiPlayer,
    #[serde(default)]
    team: ApiTeam,
    #[serde(default)]
    goals: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiPlayer {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MatchesPayload {
    #[serde(default)]
    matches: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiMatch {
    #[serde(default)]
    status: String,
    #[serde(rename = "homeTeam", default)]
    home_team: ApiTeam,
    #[serde(rename = "awayTeam", default)]
    away_team: ApiTeam,
    #[serde(default)]
    score: Option<ApiScore>,
}

#[derive(Debug, Deserialize)]
struct ApiScore {
    #[serde(rename = "fullTime", default)]
    full_time: Option<ApiScoreLine>,
}

#[derive(Debug, Deserialize)]
struct ApiScoreLine {
    #[serde(default)]
    home: Option<u32>,
    #[serde(default)]
    away: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiTeam {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    crest: Option<String>,
}

impl From<ApiTeam> for TeamRef {
    fn from(team: ApiTeam) -> Self {
        TeamRef {
            name: team.name.unwrap_or_else(|| "-".to_string()),
            crest: team.crest.unwrap_or_default(),
        }
    }
}

pub fn current_matchday(value: &Value) -> Option<u32> {
    let payload = CompetitionPayload::deserialize(value).ok()?;
    payload.current_season?.current_matchday
}

/// Full match list, or `None` when the payload has no `matches` array.
/// Entries that cannot be decoded are skipped.
pub fn matches_from_value(value: &Value) -> Option<Vec<MatchSummary>> {
    let payload = MatchesPayload::deserialize(value).ok()?;
    let matches = decode_each::<ApiMatch>(payload.matches?);
    Some(matches.into_iter().map(match_summary).collect())
}

/// Raw `status` string of every match in the list, whatever else the entry holds.
pub fn match_statuses(value: &Value) -> Vec<&str> {
    value
        .get("matches")
        .and_then(Value::as_array)
        .map(|matches| {
            matches
                .iter()
                .filter_map(|m| m.get("status").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Table of the first standings group, in API order. Rows without a
/// position are dropped.
pub fn standings_from_value(value: &Value) -> Option<Vec<StandingsRow>> {
    let payload = StandingsPayload::deserialize(value).ok()?;
    let group = payload.standings?.into_iter().next()?;
    let group = ApiStandingsGroup::deserialize(&group).ok()?;
    Some(
        decode_each::<ApiTableRow>(group.table)
            .into_iter()
            .map(|row| StandingsRow {
                position: row.position,
                team: row.team.into(),
                points: row.points,
                played: row.played_games,
                won: row.won,
                drawn: row.draw,
                lost: row.lost,
                goal_difference: row.goal_difference,
            })
            .collect(),
    )
}

pub fn scorers_from_value(value: &Value) -> Option<Vec<ScorerEntry>> {
    let payload = ScorersPayload::deserialize(value).ok()?;
    let scorers = payload.scorers?;
    Some(
        decode_each::<ApiScorer>(scorers)
            .into_iter()
            .map(|s| ScorerEntry {
                player: s.player.name.unwrap_or_else(|| "-".to_string()),
                team: s.team.into(),
                goals: s.goals,
            })
            .collect(),
    )
}

pub fn parse_matches_json(raw: &str) -> Result<Vec<MatchSummary>> {
    let value = parse_json(raw)?;
    Ok(matches_from_value(&value).unwrap_or_default())
}

pub fn parse_standings_json(raw: &str) -> Result<Vec<StandingsRow>> {
    let value = parse_json(raw)?;
    Ok(standings_from_value(&value).unwrap_or_default())
}

pub fn parse_scorers_json(raw: &str) -> Result<Vec<ScorerEntry>> {
    let value = parse_json(raw)?;
    Ok(scorers_from_value(&value).unwrap_or_default())
}

fn decode_each<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect()
}

fn parse_json(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Value::Null);
    }
    serde_json::from_str(trimmed).context("invalid football-data json")
}

fn match_summary(m: ApiMatch) -> MatchSummary {
    let full_time = m.score.and_then(|s| s.full_time);
    let (score_home, score_away) = match full_time {
        Some(line) => (line.home, line.away),
        None => (None, None),
    };
    MatchSummary {
        home: m.home_team.into(),
        away: m.away_team.into(),
        status: MatchStatus::from_api(&m.status),
        raw_status: m.status,
        score_home,
        score_away,
    }
}
