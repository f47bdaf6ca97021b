//! Terminal room explorer (default binary).
//!
//! Sizes the map from the terminal, stamps the rooms, then hands control to
//! the blocking input loop until the player quits.

use anyhow::Result;

use tui_rooms::app::{run, Frontend, TerminalFrontend};
use tui_rooms::config::{check_display, Config};
use tui_rooms::core::{Session, SimpleRng};
use tui_rooms::event_log::{EventLog, LogRecord};
use tui_rooms::term::{TermSize, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::from_env();
    config.apply_args(&args)?;

    let (columns, rows) = TerminalRenderer::size()?;
    check_display(columns, rows)?;

    let seed = config.resolve_seed();
    let mut rng = SimpleRng::new(seed);
    let mut session = Session::generate(
        columns,
        rows,
        config.map_factor,
        &config.generator(),
        &mut rng,
    );

    let mut log = EventLog::open(config.log_path.as_deref()).unwrap_or_else(|e| {
        eprintln!("[rooms] event log disabled: {:#}", e);
        EventLog::disabled()
    });
    log.record(&LogRecord::start(seed, &session, config.door_policy));

    let mut frontend = TerminalFrontend::new(TermSize::new(columns, rows));
    if let Err(e) = frontend.enter() {
        let _ = frontend.reset_display();
        return Err(e);
    }

    let result = run(&mut session, &mut frontend, &mut log);
    if result.is_err() {
        // Always try to restore terminal state.
        let _ = frontend.reset_display();
    }
    result.map(|_| ())
}
