//! calc-tui - Terminal UI for Calcpad
//!
//! Four-function calculator and build verification screen.

use std::fs::OpenOptions;
use std::sync::Mutex;

use calc_tui::{
    app::{event::EventHandler, App, AppState, UiConfig},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libcalc::{logging::LoggingConfig, Config};

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;

    result
}

/// Log to the file named by `CALC_TUI_LOG`; stderr would corrupt the screen
fn init_logging(config: &Config) -> Result<()> {
    let Ok(path) = std::env::var("CALC_TUI_LOG") else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    LoggingConfig::from_section(&config.logging, false).init_with_writer(Mutex::new(file));
    Ok(())
}

fn run_app(terminal: &mut Tui, config: &Config) -> Result<()> {
    let ui_config = UiConfig::from_config(config);
    let event_handler = EventHandler::new(ui_config.tick_rate_ms);
    let mut app = App::new(AppState::with_config(ui_config));

    tracing::info!("calc-tui started");

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|frame| ui::render(frame, app.state()))?;
        }

        let event = event_handler.next()?;
        needs_redraw = app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("calc-tui exiting");
    Ok(())
}
