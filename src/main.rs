mod app;
mod calendar;
mod config;
mod deals;
mod error;
mod events;
mod log;
mod picker;
mod recommend;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

use app::App;
use config::Config;
use events::{Action, EventHandler};
use picker::Picker;
use recommend::Recommendation;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut origin_override: Option<String> = None;
    let mut months_override: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--origin" | "-o" => {
                if i + 1 < args.len() {
                    origin_override = Some(args[i + 1].clone());
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --origin requires a city argument");
                    i += 1;
                }
            }
            "--months" | "-m" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(n) => months_override = Some(n),
                        Err(_) => eprintln!("Warning: --months requires a number"),
                    }
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --months requires a number argument");
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("bluetrip - terminal travel storefront");
                println!();
                println!("Usage: bluetrip [--origin <city>] [--months <n>]");
                println!();
                println!("  -o, --origin <city>  Origin city (default 上海)");
                println!("  -m, --months <n>     Months shown in the date picker (default 6)");
                return Ok(());
            }
            _ => {
                // Unknown flag, ignore
                i += 1;
                continue;
            }
        }
    }

    // Config precedence: CLI > env > file > default
    let config = Config::load().with_overrides(origin_override, months_override);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.origin(), config.months_shown());

    // Run the app
    let result = run_app(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Channel for recommendation results from the background fetch
    let (ai_tx, mut ai_rx) = mpsc::channel::<Vec<Recommendation>>(4);

    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    // Spinner/animation tick
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            // Terminal events (keyboard, mouse)
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    let action = EventHandler::handle_event(app, &event);
                    apply_action(app, action, &ai_tx, config);
                }
            }

            // Recommendation results from the background task
            Some(recs) = ai_rx.recv() => {
                app.deals.apply_recommendations(recs);
                app.loading_ai = false;
            }

            // Keep the spinner animated while a fetch is running
            _ = tick.tick() => {
                if app.loading_ai {
                    app.tick_spinner();
                }
            }
        }
    }
}

/// Apply an action to the app state.
fn apply_action(
    app: &mut App,
    action: Action,
    ai_tx: &mpsc::Sender<Vec<Recommendation>>,
    config: &Config,
) {
    match action {
        Action::Quit => app.should_quit = true,

        Action::OpenHelp => app.open_help(),
        Action::CloseHelp => app.close_help(),
        Action::EnterSearch => app.enter_search(),
        Action::ExitSearch => app.exit_search(),

        Action::NextTab => app.next_tab(),
        Action::PrevTab => app.prev_tab(),
        Action::SelectTab(index) => app.select_tab(index),

        Action::SwapCities => app.swap_cities(),

        Action::NextDeal => app.deals.select_next(),
        Action::PrevDeal => app.deals.select_prev(),
        Action::SelectDeal(index) => {
            if index < app.deals.len() {
                app.deals.set_selected_index(index);
            }
        }

        Action::AskAi => ask_ai(app, ai_tx, config),

        Action::InputChar(c) => app.input_char(c),
        Action::InputBackspace => app.input_backspace(),
        Action::InputDelete => app.input_delete(),
        Action::InputLeft => app.input_left(),
        Action::InputRight => app.input_right(),
        Action::InputHome => app.input_home(),
        Action::InputEnd => app.input_end(),
        Action::ClearInput => app.clear_input(),

        Action::OpenCalendar(leg) => app.open_calendar(leg),
        Action::CloseCalendar => app.close_calendar(),
        Action::ConfirmCalendar => app.confirm_calendar(),
        Action::SelectDay(date) => {
            if let Some(picker) = &mut app.date_picker {
                picker.select_day(date);
            }
        }
        Action::CalendarPrevDay => move_selection_days(app, -1),
        Action::CalendarNextDay => move_selection_days(app, 1),
        Action::CalendarPrevWeek => move_selection_days(app, -7),
        Action::CalendarNextWeek => move_selection_days(app, 7),
        Action::CalendarPrevMonth => move_selection_months(app, -1),
        Action::CalendarNextMonth => move_selection_months(app, 1),
        Action::CalendarScrollUp(n) => app.calendar_scroll_up(n),
        Action::CalendarScrollDown(n) => app.calendar_scroll_down(n),

        Action::None => {}
    }
}

fn move_selection_days(app: &mut App, days: i64) {
    if let Some(picker) = &mut app.date_picker {
        picker.move_days(days);
    }
}

fn move_selection_months(app: &mut App, months: i32) {
    if let Some(picker) = &mut app.date_picker {
        picker.move_months(months);
    }
}

/// Kick off the recommendation fetch in the background. A fetch already in
/// flight wins; repeated asks are ignored until it resolves.
fn ask_ai(app: &mut App, ai_tx: &mpsc::Sender<Vec<Recommendation>>, config: &Config) {
    if app.loading_ai {
        return;
    }
    app.loading_ai = true;
    app.spinner_frame = 0;

    let tx = ai_tx.clone();
    let config = config.clone();
    let origin = app.origin.clone();
    log::log_event(&format!("ask_ai: origin={}", origin));

    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let recs = recommend::fetch_recommendations(&client, &config, &origin).await;
        // Receiver gone means the app is shutting down
        let _ = tx.send(recs).await;
    });
}
