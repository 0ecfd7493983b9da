mod app;
mod event;
mod ui;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use levelup::config::{Config, data_dir};
use levelup::lesson::catalog::{self, LessonOrigin};
use levelup::lesson::{InputOutcome, SessionState};

use app::{App, AppScreen, key_press_from_event};
use event::{AppEvent, EventHandler};
use ui::components::progress_bar::ProgressBar;
use ui::components::typing_area::TypingArea;
use ui::theme::Palette;

#[derive(Parser)]
#[command(name = "levelup", version, about = "Typing tutor for predefined word lessons")]
struct Cli {
    #[arg(short, long, help = "Lesson name or path to a lesson JSON file")]
    lesson: Option<String>,

    #[arg(short, long, help = "Resume from a session snapshot JSON file")]
    resume: Option<PathBuf>,

    #[arg(long, help = "List available lessons and exit")]
    list: bool,

    #[arg(long, help = "Print the session snapshot as JSON on exit")]
    print_snapshot: bool,

    #[arg(long, help = "Write the current configuration to the config file and exit")]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::config_path();
        Config::init_file(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => {
            eprintln!("Warning: {err:#}, using defaults");
            (Config::default(), Some(err))
        }
    };

    if cli.list {
        for entry in catalog::available(&config.lesson_dir()) {
            let origin = match entry.origin {
                LessonOrigin::User => "user",
                LessonOrigin::Bundled => "bundled",
            };
            println!("{:<24} {origin}", entry.name);
        }
        return Ok(());
    }

    init_logging(&config)?;
    if let Some(err) = config_error {
        warn!(error = %format!("{err:#}"), "config not loaded, using defaults");
    }

    let lesson_name = cli
        .lesson
        .clone()
        .unwrap_or_else(|| config.default_lesson.clone());
    let lesson = catalog::resolve(&lesson_name, &config.lesson_dir())
        .with_context(|| format!("cannot load lesson '{lesson_name}'"))?;
    let snapshot = match &cli.resume {
        Some(path) => Some(load_snapshot(path)?),
        None => None,
    };

    info!(lesson = %lesson_name, resumed = snapshot.is_some(), "starting lesson");
    let mut app = App::new(lesson, &lesson_name, snapshot, config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(app.config.tick_rate_ms()));
    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    if cli.print_snapshot {
        println!("{}", serde_json::to_string_pretty(&app.session.snapshot())?);
    }

    Ok(())
}

/// The terminal belongs to the UI, so logs go to a file under the data dir.
fn init_logging(config: &Config) -> Result<()> {
    let dir = data_dir();
    fs::create_dir_all(&dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("levelup.log"))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_snapshot(path: &Path) -> Result<SessionState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read snapshot {}", path.display()))?;
    let snapshot = serde_json::from_str(&content)
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    Ok(snapshot)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let palette = Palette::default();
    loop {
        terminal.draw(|frame| render(frame, app, &palette))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Lesson => match key.code {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Tab => app.request_hint(),
            _ => {
                if let Some(press) = key_press_from_event(&key) {
                    app.handle_key_press(&press);
                }
            }
        },
        AppScreen::Finished => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => app.restart(),
            KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
    }
}

fn render(frame: &mut ratatui::Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.title()),
            Style::default()
                .fg(palette.header_fg)
                .bg(palette.header_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", app.part_label()),
            Style::default().fg(palette.header_fg).bg(palette.header_bg),
        ),
    ]))
    .style(Style::default().bg(palette.header_bg));
    frame.render_widget(header, layout[0]);

    match app.screen {
        AppScreen::Lesson => {
            frame.render_widget(
                TypingArea::new(&app.view, palette, app.config.show_typed_words),
                layout[1],
            );
        }
        AppScreen::Finished => {
            let done = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "  Lesson complete!",
                    Style::default()
                        .fg(palette.text_done)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .block(Block::bordered().border_style(Style::default().fg(palette.border)));
            frame.render_widget(done, layout[1]);
        }
    }

    let ratio = if app.screen == AppScreen::Finished {
        1.0
    } else {
        app.session.progress()
    };
    frame.render_widget(ProgressBar::new("Lesson", ratio, palette), layout[2]);

    let footer_text = match app.screen {
        AppScreen::Lesson if app.view.can_hint => " [Tab] Hint  [Esc] Quit",
        AppScreen::Lesson => " [Esc] Quit",
        AppScreen::Finished => " [Enter] Again  [q] Quit",
    };
    let mut footer = vec![Span::styled(footer_text, Style::default().fg(palette.accent))];
    if app.last_outcome == Some(InputOutcome::PartFinished) {
        footer.push(Span::styled(
            "  Part complete",
            Style::default().fg(palette.text_done),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(footer)), layout[3]);
}
