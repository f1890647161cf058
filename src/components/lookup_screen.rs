use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ResultPanel, ResultPanelProps, SearchBar, SearchBarProps};
use crate::action::Action;
use crate::state::AppState;

/// Props for LookupScreen - read-only view of state
pub struct LookupScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: input on top, result panel below, hint bar at the bottom
pub struct LookupScreen {
    search: SearchBar,
    panel: ResultPanel,
}

impl Default for LookupScreen {
    fn default() -> Self {
        Self {
            search: SearchBar::new(),
            panel: ResultPanel,
        }
    }
}

impl LookupScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for LookupScreen {
    type Props<'a> = LookupScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Esc {
                return vec![Action::Quit];
            }
        }

        // Everything else belongs to the input
        let search_props = SearchBarProps {
            query: &props.state.query,
            is_focused: true,
            on_change: Action::QueryChange,
            on_submit: Action::LookupSubmit,
        };
        self.search
            .handle_event(event, search_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Input
            Constraint::Min(1),    // Result panel
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let search_props = SearchBarProps {
            query: &props.state.query,
            is_focused: props.is_focused,
            on_change: Action::QueryChange,
            on_submit: Action::LookupSubmit,
        };
        self.search.render(frame, chunks[0], search_props);

        self.panel
            .render(frame, chunks[1], ResultPanelProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "lookup"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    #[test]
    fn test_escape_quits() {
        let mut component = LookupScreen::new();
        let state = AppState::default();
        let props = LookupScreenProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(KeyEvent::from(KeyCode::Esc)), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_typing_reaches_input() {
        let mut component = LookupScreen::new();
        let state = AppState::default();
        let props = LookupScreenProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("p")), props)
            .into_iter()
            .collect();
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::QueryChange(q) if q == "p")),
            "typing should change the query: {:?}",
            actions
        );
    }

    #[test]
    fn test_enter_submits_current_query() {
        let mut component = LookupScreen::new();
        let state = AppState {
            query: "Paris".into(),
            ..Default::default()
        };
        let props = LookupScreenProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(KeyEvent::from(KeyCode::Enter)), props)
            .into_iter()
            .collect();
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::LookupSubmit(q) if q == "Paris")),
            "enter should submit the query: {:?}",
            actions
        );
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = LookupScreen::new();
        let state = AppState::default();
        let props = LookupScreenProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("p")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }
}
