use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};

use crate::state::{AppState, Tab};
use crate::views::{
    FIXTURES_EMPTY, FixtureCard, FixturesView, LEGEND, SCORERS_EMPTY, STANDINGS_UNAVAILABLE,
    ScorersView, StandingsView, count_text,
};

const MUTED: Color = Color::Rgb(0x9a, 0xa5, 0xb1);
const CARD_ROW_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_title(frame, chunks[0], state);
    render_summary(frame, chunks[1], state);
    render_tabs(frame, chunks[2], state);

    match state.tab {
        Tab::Fixtures => render_fixtures(frame, chunks[3], state),
        Tab::Standings => render_standings(frame, chunks[3], state),
        Tab::Scorers => render_scorers(frame, chunks[3], state),
    }

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[4]);

    let footer = Paragraph::new(footer_text()).style(Style::default().fg(MUTED));
    frame.render_widget(footer, chunks[5]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = if state.loading {
        "Carregando…".to_string()
    } else {
        match &state.updated {
            Some(at) => format!("Atualizado {at}"),
            None => String::new(),
        }
    };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);
    let title = Paragraph::new("⚽ Brasileirão Série A")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, cols[0]);
    let status = Paragraph::new(status)
        .alignment(Alignment::Right)
        .style(Style::default().fg(MUTED));
    frame.render_widget(status, cols[1]);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    let snap = &state.snapshot;
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let round = vec![
        Line::from(Span::styled("🏁 Rodada Atual", Style::default().fg(MUTED))),
        Line::from(Span::styled(
            format!("{} / {}", snap.matchday, snap.total_rounds),
            bold,
        )),
    ];
    let leader = vec![
        Line::from(Span::styled("🥇 Líder", Style::default().fg(MUTED))),
        Line::from(Span::styled(snap.leader_name.clone(), bold)),
        Line::from(vec![
            Span::styled("Pontos: ", Style::default().fg(MUTED)),
            Span::styled(snap.leader_points.clone(), bold),
        ]),
    ];
    let scorer = vec![
        Line::from(Span::styled("⚽ Artilheiro", Style::default().fg(MUTED))),
        Line::from(Span::styled(snap.scorer_name.clone(), bold)),
        Line::from(vec![
            Span::styled(format!("{} — ", snap.scorer_team), Style::default().fg(MUTED)),
            Span::styled(format!("{} gols", snap.scorer_goals), bold),
        ]),
    ];

    for (area, lines) in cols.iter().zip([round, leader, scorer]) {
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *area);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| state.tab_title(*tab))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_fixtures(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let today = if state.date == state.today { " (hoje)" } else { "" };
    let picker = Line::from(vec![
        Span::raw("📅 Jogos do Dia  "),
        Span::styled(
            format!("◀ {}{today} ▶", state.date.format("%d/%m/%Y")),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  h/l muda a data, t hoje", Style::default().fg(MUTED)),
    ]);
    frame.render_widget(Paragraph::new(picker), sections[0]);

    let list_area = sections[1];
    let cards = match &state.fixtures {
        FixturesView::Empty => {
            let empty = Paragraph::new(FIXTURES_EMPTY).style(Style::default().fg(Color::Yellow));
            frame.render_widget(empty, list_area);
            return;
        }
        FixturesView::Matches(cards) => cards,
    };

    if list_area.height < CARD_ROW_HEIGHT {
        return;
    }
    let visible = (list_area.height / CARD_ROW_HEIGHT) as usize;
    let (start, end) = visible_range(state.scroll_offset(), cards.len(), visible);

    for (i, card) in cards[start..end].iter().enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + (i as u16) * CARD_ROW_HEIGHT,
            width: list_area.width,
            height: CARD_ROW_HEIGHT,
        };
        render_fixture_card(frame, row_area, card);
    }
}

fn render_fixture_card(frame: &mut Frame, area: Rect, card: &FixtureCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(card.label, Style::default().fg(card.color)))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(inner);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    frame.render_widget(
        Paragraph::new(card.home.as_str())
            .alignment(Alignment::Right)
            .style(bold),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{} - {}", card.score_home, card.score_away))
            .alignment(Alignment::Center)
            .style(bold),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(card.away.as_str())
            .alignment(Alignment::Left)
            .style(bold),
        cols[2],
    );
}

fn render_standings(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = match &state.standings {
        StandingsView::Unavailable => {
            let empty =
                Paragraph::new(STANDINGS_UNAVAILABLE).style(Style::default().fg(Color::Red));
            frame.render_widget(empty, area);
            return;
        }
        StandingsView::Table(lines) => lines,
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(area);

    let header = Row::new(["", "#", "Clube", "PTS", "J", "V", "E", "D", "SG"])
        .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD));
    let rows = lines.iter().skip(state.scroll_offset()).map(|line| {
        let row = &line.row;
        Row::new(vec![
            Cell::from(Span::styled("▌", Style::default().fg(line.band.color()))),
            Cell::from(row.position.to_string()),
            Cell::from(row.team.name.clone()),
            Cell::from(Span::styled(
                count_text(row.points),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Cell::from(row.played.to_string()),
            Cell::from(row.won.to_string()),
            Cell::from(row.drawn.to_string()),
            Cell::from(row.lost.to_string()),
            Cell::from(row.goal_difference.to_string()),
        ])
    });
    let widths = [
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
    ];
    let table = Table::new(rows, widths).header(header).column_spacing(1);
    frame.render_widget(table, sections[0]);

    let mut legend = vec![Span::styled(
        "Legenda: ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for band in LEGEND {
        legend.push(Span::styled("■ ", Style::default().fg(band.color())));
        legend.push(Span::raw(format!("{}   ", band.label())));
    }
    frame.render_widget(Paragraph::new(Line::from(legend)), sections[1]);
}

fn render_scorers(frame: &mut Frame, area: Rect, state: &AppState) {
    let cards = match &state.scorers {
        ScorersView::Empty => {
            let empty = Paragraph::new(SCORERS_EMPTY).style(Style::default().fg(Color::Yellow));
            frame.render_widget(empty, area);
            return;
        }
        ScorersView::Ranked(cards) => cards,
    };

    let rows = cards.iter().skip(state.scroll_offset()).map(|card| {
        let style = Style::default()
            .bg(card.medal.background())
            .fg(card.medal.foreground());
        Row::new(vec![
            Cell::from(card.medal.icon()),
            Cell::from(Span::styled(
                card.player.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Cell::from(card.team.clone()),
            Cell::from(Span::styled(
                format!("⚽ {}", card.goals),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .style(style)
    });
    let widths = [
        Constraint::Length(3),
        Constraint::Min(18),
        Constraint::Min(16),
        Constraint::Length(7),
    ];
    let table = Table::new(rows, widths).column_spacing(1);
    frame.render_widget(table, area);
}

fn visible_range(offset: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 || visible == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }
    let start = offset.min(total - visible);
    (start, start + visible)
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn footer_text() -> &'static str {
    "🏁 Dados fornecidos por Football-Data.org | 1/2/3 Abas | h/l Data | t Hoje | j/k Rolar | r Atualizar | ? Ajuda | q Sair"
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Brasileirão Série A - Ajuda",
        "",
        "Abas:",
        "  1 / 2 / 3    Jogos / Classificação / Artilheiros",
        "  Tab          Próxima aba",
        "",
        "Jogos do Dia:",
        "  h / ←        Dia anterior",
        "  l / →        Próximo dia",
        "  t            Hoje",
        "",
        "Geral:",
        "  j/k ou ↑/↓   Rolar",
        "  r            Descartar cache e atualizar",
        "  ?            Ajuda",
        "  q            Sair",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Ajuda").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
