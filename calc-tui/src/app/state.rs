//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use std::time::Duration;

use libcalc::verification::DEFAULT_REFRESH;
use libcalc::{CalculatorState, Config, VerificationScreen};

use super::actions::Screen;

/// Root application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub current_screen: Screen,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Last calculator state reported by the session
    pub calculator: CalculatorState,

    /// Verification screen banner and clock
    pub verification: VerificationScreen,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Verification clock refresh period
    pub clock_refresh: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl UiConfig {
    /// Build from the loaded config; environment variables win
    pub fn from_config(config: &Config) -> Self {
        let colors_enabled = config.display.colors
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("CALC_TUI_NO_COLOR").is_err();

        let unicode_enabled = config.display.unicode && colors_enabled;

        let tick_rate_ms = std::env::var("CALC_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.tui.tick_rate_ms);

        let clock_refresh = config.clock.refresh_period().unwrap_or(DEFAULT_REFRESH);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
            clock_refresh,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state for the given UI configuration
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Calculator,
            help_visible: false,
            calculator: CalculatorState::new(),
            verification: VerificationScreen::new(config.clock_refresh),
            config,
        }
    }

    /// Does keyboard input go to the calculator?
    pub fn accepts_calculator_input(&self) -> bool {
        self.current_screen == Screen::Calculator && !self.help_visible
    }
}
