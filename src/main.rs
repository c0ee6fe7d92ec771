use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use bsa_terminal::config::Config;
use bsa_terminal::dashboard::Dashboard;
use bsa_terminal::fetch::HttpFetcher;
use bsa_terminal::logging::init_tracing;
use bsa_terminal::state::{AppState, Tab};
use bsa_terminal::ui;

enum Reload {
    None,
    Fixtures,
    All,
}

struct App {
    state: AppState,
    dashboard: Dashboard<HttpFetcher>,
    should_quit: bool,
    refresh_every: Duration,
    last_refresh: Instant,
}

impl App {
    fn new(config: &Config) -> Self {
        Self {
            state: AppState::new(Local::now().date_naive()),
            dashboard: Dashboard::from_config(config),
            should_quit: false,
            refresh_every: config.refresh_every,
            last_refresh: Instant::now(),
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Reload {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.select_tab(Tab::Fixtures),
            KeyCode::Char('2') => self.state.select_tab(Tab::Standings),
            KeyCode::Char('3') => self.state.select_tab(Tab::Scorers),
            KeyCode::Tab => self.state.next_tab(),
            KeyCode::BackTab => self.state.prev_tab(),
            KeyCode::Char('h') | KeyCode::Left => {
                self.state.shift_date(-1);
                return Reload::Fixtures;
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.state.shift_date(1);
                return Reload::Fixtures;
            }
            KeyCode::Char('t') => {
                self.state.reset_date();
                return Reload::Fixtures;
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('r') => {
                self.dashboard.invalidate();
                self.state.push_log("[INFO] Cache cleared");
                return Reload::All;
            }
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
        Reload::None
    }

    fn reload<B: Backend>(&mut self, terminal: &mut Terminal<B>, what: Reload) -> io::Result<()> {
        if matches!(what, Reload::None) {
            return Ok(());
        }
        self.state.loading = true;
        terminal.draw(|f| ui::draw(f, &self.state))?;

        match what {
            Reload::All => {
                self.dashboard.refresh_all(&mut self.state);
                self.last_refresh = Instant::now();
            }
            Reload::Fixtures => self.dashboard.refresh_fixtures(&mut self.state),
            Reload::None => {}
        }
        self.state.loading = false;
        self.state.updated = Some(Local::now().format("%H:%M:%S").to_string());
        Ok(())
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = Config::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    app.reload(terminal, Reload::All)?;

    loop {
        if app.last_refresh.elapsed() >= app.refresh_every {
            app.reload(terminal, Reload::All)?;
        }

        terminal.draw(|f| ui::draw(f, &app.state))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let what = app.on_key(key);
                    app.reload(terminal, what)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
