use crossbeam_channel::{bounded, select, tick, unbounded, Receiver, Sender};

use crossterm::cursor;
use crossterm::event::Event;
use crossterm::execute;
use crossterm::terminal;

use lazy_static::lazy_static;

use tui::backend::{Backend, CrosstermBackend};
use tui::Terminal;

use std::io;
use std::panic;
use std::time::Duration;

mod app;
mod averaging;
mod contact;
mod draw;
mod event;
mod opts;
mod service;
mod task;
mod theme;
mod widget;

use crate::opts::Opts;
use crate::theme::Theme;

lazy_static! {
    pub static ref OPTS: Opts = opts::resolve_opts();
    pub static ref THEME: Theme = OPTS.theme.unwrap_or_default();
    pub static ref CLIENT: api::Client = api::Client::new();
    pub static ref DATA_RECEIVED: (Sender<()>, Receiver<()>) = bounded(1);
}

fn main() {
    better_panic::install();

    // Resolve options before raw mode so argument errors print normally
    let hide_help = OPTS.hide_help;

    let _log_guard = setup_logging();

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).unwrap();

    setup_panic_hook();
    setup_terminal();

    let ticker = tick(Duration::from_millis(250));
    let ui_events = setup_ui_events();
    let ctrl_c_events = setup_ctrl_c();
    let data_received = DATA_RECEIVED.1.clone();

    let mut app = app::App {
        mode: app::Mode::Calculator,
        previous_mode: app::Mode::Calculator,
        calculator: widget::CalculatorState::new(),
        contact: widget::ContactState::new(),
        help: widget::HelpWidget {},
        hide_help,
    };

    draw::draw(&mut terminal, &mut app);

    loop {
        select! {
            recv(ctrl_c_events) -> _ => {
                break;
            }
            recv(ticker) -> _ => {
                app.contact.update();

                if app.contact.in_flight() {
                    app.contact.loading_tick();
                }

                redraw(&mut terminal, &mut app);
            }
            recv(data_received) -> _ => {
                app.contact.update();

                redraw(&mut terminal, &mut app);
            }
            recv(ui_events) -> message => {
                if let Ok(Event::Key(key_event)) = message {
                    event::handle_key_bindings(app.mode, key_event, &mut app);
                }

                redraw(&mut terminal, &mut app);
            }
        }
    }

    cleanup_terminal();
}

fn redraw<B: Backend>(terminal: &mut Terminal<B>, app: &mut app::App) {
    match app.mode {
        app::Mode::Help => draw::draw_help(terminal, app),
        _ => draw::draw(terminal, app),
    }
}

fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = OPTS.log_file.as_ref()?;

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .ok()?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

fn setup_terminal() {
    let mut stdout = io::stdout();

    execute!(stdout, terminal::EnterAlternateScreen).unwrap();
    execute!(stdout, cursor::Hide).unwrap();

    execute!(stdout, terminal::Clear(terminal::ClearType::All)).unwrap();

    terminal::enable_raw_mode().unwrap();
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();

    execute!(stdout, cursor::MoveTo(0, 0)).unwrap();
    execute!(stdout, terminal::Clear(terminal::ClearType::All)).unwrap();

    execute!(stdout, terminal::LeaveAlternateScreen).unwrap();
    execute!(stdout, cursor::Show).unwrap();

    terminal::disable_raw_mode().unwrap();
}

fn setup_ui_events() -> Receiver<Event> {
    let (sender, receiver) = unbounded();
    std::thread::spawn(move || loop {
        sender.send(crossterm::event::read().unwrap()).unwrap();
    });

    receiver
}

fn setup_ctrl_c() -> Receiver<()> {
    let (sender, receiver) = unbounded();
    ctrlc::set_handler(move || {
        sender.send(()).unwrap();
    })
    .unwrap();

    receiver
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
