//! Actions - user intents and async lookup results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReading;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Lookup category =====
    /// Query text changed
    QueryChange(String),

    /// Intent: Submit the query for lookup (Enter or submit control)
    LookupSubmit(String),

    /// Result: Both remote calls succeeded
    LookupDidLoad(WeatherReading),

    /// Result: Lookup resolved to a failure message
    LookupDidError(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Periodic tick for the loading indicator
    Tick,

    /// Exit the application
    Quit,
}
