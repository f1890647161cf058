//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current weather for a resolved city
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReading {
    /// Display label, "name, country" when the geocoder knows the country
    pub city: String,
    /// Degrees Celsius, as reported
    pub temperature: f64,
    /// km/h, as reported
    pub windspeed: f64,
}

/// Lifecycle of one lookup: Idle → Loading → Success/Failure.
///
/// A new lookup replaces the whole value, so nothing survives from the
/// previous cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(WeatherReading),
    Failure(String),
}

impl LookupState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LookupState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupState::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LookupState::Failure(_))
    }

    /// The reading, if the last lookup succeeded
    pub fn reading(&self) -> Option<&WeatherReading> {
        match self {
            LookupState::Success(reading) => Some(reading),
            _ => None,
        }
    }

    /// The failure message, if the last lookup failed
    pub fn error(&self) -> Option<&str> {
        match self {
            LookupState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Shown when a lookup is submitted with an empty or whitespace-only query
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name!";

/// Timing for the loading indicator animation
pub const LOADING_ANIM_TICK_MS: u64 = 250;
pub const LOADING_ANIM_FRAMES: u32 = 4;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City name being typed
    #[debug(section = "Lookup", label = "Query")]
    pub query: String,

    /// Lookup lifecycle: Idle → Loading → Success/Failure
    #[debug(section = "Lookup", label = "State", debug_fmt)]
    pub lookup: LookupState,

    /// Animation frame counter for the loading indicator
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn loading_anim_active(&self) -> bool {
        self.lookup.is_loading()
    }
}
