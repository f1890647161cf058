use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::{AppState, LOADING_ANIM_FRAMES, LookupState, WeatherReading};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Result panel below the input: idle hint, loading indicator, failure
/// message, or the weather card
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub state: &'a AppState,
}

/// Rows of the weather card: city + blank + FIGlet temperature + blank + wind.
const TEMP_CAP: u16 = 6;

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.state.lookup {
            LookupState::Idle => render_idle_hint(frame, area),
            LookupState::Loading => render_loading(frame, area, props.state.tick_count),
            LookupState::Failure(message) => render_failure(frame, area, message),
            LookupState::Success(reading) => render_reading(frame, area, reading),
        }
    }
}

fn render_idle_hint(frame: &mut Frame, area: Rect) {
    let chunks = centered_line(area);

    let hint = Line::from(vec![
        Span::styled("Type a city name and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[1]);
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: u32) {
    let chunks = centered_line(area);

    let dots = (tick_count % LOADING_ANIM_FRAMES) as usize;
    let msg = Line::from(vec![Span::styled(
        format!("Loading{}", ".".repeat(dots)),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[1]);
}

fn render_failure(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                message.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to try again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[3],
    );
}

fn render_reading(frame: &mut Frame, area: Rect, reading: &WeatherReading) {
    let chunks = Layout::vertical([
        Constraint::Length(1),        // city label
        Constraint::Length(1),        // blank
        Constraint::Max(TEMP_CAP),    // FIGlet temperature
        Constraint::Length(1),        // blank
        Constraint::Length(1),        // wind
    ])
    .flex(Flex::Center)
    .split(area);

    let city = Line::from(vec![Span::styled(
        reading.city.clone(),
        Style::default().fg(Color::White).bold(),
    )])
    .centered();
    frame.render_widget(Paragraph::new(city), chunks[0]);

    let temp_text = format!("{:.1}°C", reading.temperature);
    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(reading.temperature));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);

    let wind = Line::from(vec![Span::styled(
        format!("Wind speed {:.1} km/h", reading.windspeed),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(wind), chunks[4]);
}

fn centered_line(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area)
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
