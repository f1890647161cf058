pub mod lookup_screen;
pub mod result_panel;
pub mod search_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use lookup_screen::{LookupScreen, LookupScreenProps};
pub use result_panel::{ERROR_ICON, ResultPanel, ResultPanelProps};
pub use search_bar::{SearchBar, SearchBarProps};
