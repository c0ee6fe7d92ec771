//! Projections from cached API payloads to display-ready values.
//!
//! Builders never fail: missing or unavailable input turns into placeholder
//! text or an explicit empty state.

use ratatui::style::Color;

use crate::config::{
    LEAGUE_TEAMS, LIBERTADORES_LAST, PRE_LIBERTADORES_LAST, RELEGATION_FIRST, SCORERS_LIMIT,
    SUL_AMERICANA_LAST, TOTAL_ROUNDS,
};
use crate::fetch::FetchOutcome;
use crate::football_data::{
    MatchStatus, MatchSummary, StandingsRow, current_matchday, matches_from_value,
    scorers_from_value, standings_from_value,
};

pub const PLACEHOLDER: &str = "-";

pub const FIXTURES_EMPTY: &str = "⚠️ Nenhum jogo encontrado para esta data.";
pub const STANDINGS_UNAVAILABLE: &str = "⚠️ Nenhuma classificação encontrada.";
pub const SCORERS_EMPTY: &str = "⚠️ Nenhum dado de artilheiro disponível.";

const FINISHED_COLOR: Color = Color::Rgb(0xa3, 0xb1, 0xb8);
const LIVE_COLOR: Color = Color::Rgb(0xff, 0x6b, 0x6b);
const SCHEDULED_COLOR: Color = Color::Rgb(0x74, 0xc0, 0xfc);

const UNPLAYED_HOME: &str = "NÃO";
const UNPLAYED_AWAY: &str = "INICIADO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSnapshot {
    pub matchday: String,
    pub total_rounds: u32,
    pub leader_name: String,
    pub leader_points: String,
    pub leader_crest: String,
    pub scorer_name: String,
    pub scorer_team: String,
    pub scorer_goals: String,
}

impl Default for SeasonSnapshot {
    fn default() -> Self {
        Self {
            matchday: PLACEHOLDER.to_string(),
            total_rounds: TOTAL_ROUNDS,
            leader_name: PLACEHOLDER.to_string(),
            leader_points: PLACEHOLDER.to_string(),
            leader_crest: String::new(),
            scorer_name: PLACEHOLDER.to_string(),
            scorer_team: PLACEHOLDER.to_string(),
            scorer_goals: PLACEHOLDER.to_string(),
        }
    }
}

/// Each source is read on its own; a failed one only blanks its own fields.
pub fn build_season_snapshot(
    competition: &FetchOutcome,
    standings: &FetchOutcome,
    scorers: &FetchOutcome,
) -> SeasonSnapshot {
    let mut snapshot = SeasonSnapshot::default();

    if let Some(matchday) = competition.payload().and_then(current_matchday) {
        snapshot.matchday = matchday.to_string();
    }

    let leader = standings
        .payload()
        .and_then(standings_from_value)
        .and_then(|rows| rows.into_iter().next());
    if let Some(leader) = leader {
        snapshot.leader_name = leader.team.name;
        snapshot.leader_points = count_text(leader.points);
        snapshot.leader_crest = leader.team.crest;
    }

    let top_scorer = scorers
        .payload()
        .and_then(scorers_from_value)
        .and_then(|entries| entries.into_iter().next());
    if let Some(top) = top_scorer {
        snapshot.scorer_name = top.player;
        snapshot.scorer_team = top.team.name;
        snapshot.scorer_goals = count_text(top.goals);
    }

    snapshot
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCard {
    pub home: String,
    pub home_crest: String,
    pub away: String,
    pub away_crest: String,
    pub score_home: String,
    pub score_away: String,
    pub status: MatchStatus,
    pub label: &'static str,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixturesView {
    Empty,
    Matches(Vec<FixtureCard>),
}

pub fn build_fixtures(outcome: &FetchOutcome) -> FixturesView {
    let matches = outcome
        .payload()
        .and_then(matches_from_value)
        .unwrap_or_default();
    if matches.is_empty() {
        return FixturesView::Empty;
    }
    FixturesView::Matches(matches.into_iter().map(fixture_card).collect())
}

fn fixture_card(m: MatchSummary) -> FixtureCard {
    let (label, color, score_home, score_away) = match m.status {
        MatchStatus::Finished => (
            "Finalizado",
            FINISHED_COLOR,
            count_text(m.score_home),
            count_text(m.score_away),
        ),
        MatchStatus::Live => (
            "🔴 Ao vivo",
            LIVE_COLOR,
            count_text(m.score_home),
            count_text(m.score_away),
        ),
        MatchStatus::Scheduled => (
            "Agendado",
            SCHEDULED_COLOR,
            UNPLAYED_HOME.to_string(),
            UNPLAYED_AWAY.to_string(),
        ),
    };
    FixtureCard {
        home: m.home.name,
        home_crest: m.home.crest,
        away: m.away.name,
        away_crest: m.away.crest,
        score_home,
        score_away,
        status: m.status,
        label,
        color,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Libertadores,
    PreLibertadores,
    SulAmericana,
    Neutral,
    Relegation,
}

/// Coloured bands shown in the standings legend, in display order.
pub const LEGEND: [Band; 4] = [
    Band::Libertadores,
    Band::PreLibertadores,
    Band::SulAmericana,
    Band::Relegation,
];

impl Band {
    pub fn for_position(position: u32) -> Self {
        if position <= LIBERTADORES_LAST {
            Band::Libertadores
        } else if position <= PRE_LIBERTADORES_LAST {
            Band::PreLibertadores
        } else if position <= SUL_AMERICANA_LAST {
            Band::SulAmericana
        } else if position >= RELEGATION_FIRST {
            Band::Relegation
        } else {
            Band::Neutral
        }
    }

    pub fn color(self) -> Color {
        match self {
            Band::Libertadores => Color::Rgb(0x00, 0xb8, 0x94),
            Band::PreLibertadores => Color::Rgb(0x09, 0x84, 0xe3),
            Band::SulAmericana => Color::Rgb(0xfe, 0xca, 0x57),
            Band::Neutral => Color::Rgb(0x63, 0x6e, 0x72),
            Band::Relegation => Color::Rgb(0xd6, 0x30, 0x31),
        }
    }

    pub fn label(self) -> String {
        match self {
            Band::Libertadores => format!("Libertadores (1º–{LIBERTADORES_LAST}º)"),
            Band::PreLibertadores => format!(
                "Pré-Libertadores ({}º–{PRE_LIBERTADORES_LAST}º)",
                LIBERTADORES_LAST + 1
            ),
            Band::SulAmericana => format!(
                "Sul-Americana ({}º–{SUL_AMERICANA_LAST}º)",
                PRE_LIBERTADORES_LAST + 1
            ),
            Band::Neutral => String::new(),
            Band::Relegation => format!("Rebaixamento ({RELEGATION_FIRST}º–{LEAGUE_TEAMS}º)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsLine {
    pub row: StandingsRow,
    pub band: Band,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandingsView {
    Unavailable,
    Table(Vec<StandingsLine>),
}

pub fn build_standings(outcome: &FetchOutcome) -> StandingsView {
    let rows = outcome
        .payload()
        .and_then(standings_from_value)
        .unwrap_or_default();
    if rows.is_empty() {
        return StandingsView::Unavailable;
    }
    StandingsView::Table(
        rows.into_iter()
            .map(|row| StandingsLine {
                band: Band::for_position(row.position),
                row,
            })
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Plain,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Medal::Gold,
            2 => Medal::Silver,
            3 => Medal::Bronze,
            _ => Medal::Plain,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
            Medal::Plain => "⚽",
        }
    }

    pub fn background(self) -> Color {
        match self {
            Medal::Gold => Color::Rgb(0xff, 0xd4, 0x3b),
            Medal::Silver => Color::Rgb(0xad, 0xb5, 0xbd),
            Medal::Bronze => Color::Rgb(0xff, 0x9f, 0x1c),
            Medal::Plain => Color::Rgb(0x07, 0x12, 0x1a),
        }
    }

    pub fn foreground(self) -> Color {
        match self {
            Medal::Plain => Color::Rgb(0xe6, 0xed, 0xf3),
            _ => Color::Rgb(0x08, 0x12, 0x1a),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerCard {
    pub rank: usize,
    pub player: String,
    pub team: String,
    pub crest: String,
    pub goals: String,
    pub medal: Medal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScorersView {
    Empty,
    Ranked(Vec<ScorerCard>),
}

pub fn build_scorers(outcome: &FetchOutcome) -> ScorersView {
    let entries = outcome
        .payload()
        .and_then(scorers_from_value)
        .unwrap_or_default();
    if entries.is_empty() {
        return ScorersView::Empty;
    }
    ScorersView::Ranked(
        entries
            .into_iter()
            .take(SCORERS_LIMIT)
            .enumerate()
            .map(|(idx, entry)| {
                let rank = idx + 1;
                ScorerCard {
                    rank,
                    player: entry.player,
                    team: entry.team.name,
                    crest: entry.team.crest,
                    goals: count_text(entry.goals),
                    medal: Medal::for_rank(rank),
                }
            })
            .collect(),
    )
}

/// Number as text, or the placeholder when the API left it out.
pub fn count_text<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
