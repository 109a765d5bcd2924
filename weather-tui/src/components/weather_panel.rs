//! Results area: one layout per fetch state, vertically centered

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weather_core::{AppState, FetchState, WeatherSnapshot};

use super::{
    format_reading, DetailsCard, DetailsCardProps, LocationHeader, LocationHeaderProps,
    ERROR_ICON, SPINNERS,
};
use crate::component::Component;

pub const IDLE_PROMPT: &str = "Enter a city to fetch weather data";
pub const LOADING_TEXT: &str = "Fetching weather...";
pub const RETRY_HINT: &str = "Edit the city and press Enter to try again";

pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
}

impl Component for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let blocks = blocks_for_state(props.state);
        let constraints = blocks.iter().map(|block| Constraint::Length(block.height()));
        let areas = Layout::vertical(constraints).flex(Flex::Center).split(area);

        for (block, area) in blocks.into_iter().zip(areas.iter().copied()) {
            block.render(frame, area);
        }
    }
}

enum BodyBlock<'a> {
    Line(Line<'a>),
    Header(&'a WeatherSnapshot),
    Details(&'a WeatherSnapshot),
}

impl BodyBlock<'_> {
    fn height(&self) -> u16 {
        match self {
            BodyBlock::Line(_) => 1,
            BodyBlock::Header(_) => LocationHeader::HEIGHT,
            BodyBlock::Details(_) => DetailsCard::HEIGHT,
        }
    }

    fn render(self, frame: &mut Frame, area: Rect) {
        match self {
            BodyBlock::Line(line) => frame.render_widget(Paragraph::new(line), area),
            BodyBlock::Header(snapshot) => LocationHeader.render(
                frame,
                area,
                LocationHeaderProps {
                    location: &snapshot.location,
                },
            ),
            BodyBlock::Details(snapshot) => {
                let [card] = Layout::horizontal([Constraint::Length(DetailsCard::WIDTH)])
                    .flex(Flex::Center)
                    .areas(area);
                DetailsCard.render(frame, card, DetailsCardProps { snapshot });
            }
        }
    }
}

fn blocks_for_state(state: &AppState) -> Vec<BodyBlock<'_>> {
    match &state.weather {
        FetchState::Idle => vec![BodyBlock::Line(
            Line::from(Span::styled(
                IDLE_PROMPT,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        )],
        FetchState::Loading => {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            vec![BodyBlock::Line(
                Line::from(vec![
                    Span::styled(spinner, Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!(" {LOADING_TEXT}"),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .centered(),
            )]
        }
        FetchState::Success(snapshot) => {
            let current = &snapshot.current;
            vec![
                BodyBlock::Header(snapshot),
                blank_line(),
                BodyBlock::Line(
                    Line::from(Span::styled(
                        format!("{}°C", format_reading(current.feelslike_c)),
                        Style::default().fg(temp_to_color(current.feelslike_c)).bold(),
                    ))
                    .centered(),
                ),
                BodyBlock::Line(
                    Line::from(Span::styled(
                        current.condition.text.as_str(),
                        Style::default().fg(Color::Gray),
                    ))
                    .centered(),
                ),
                BodyBlock::Line(
                    Line::from(Span::styled(
                        current.condition.hi_res_icon_url(),
                        Style::default().fg(Color::DarkGray).italic(),
                    ))
                    .centered(),
                ),
                blank_line(),
                BodyBlock::Details(snapshot),
            ]
        }
        FetchState::Error(message) => vec![
            BodyBlock::Line(Line::from(ERROR_ICON).centered()),
            BodyBlock::Line(
                Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Rgb(200, 100, 100)),
                ))
                .centered(),
            ),
            blank_line(),
            BodyBlock::Line(
                Line::from(Span::styled(
                    RETRY_HINT,
                    Style::default().fg(Color::DarkGray),
                ))
                .centered(),
            ),
        ],
    }
}

fn blank_line<'a>() -> BodyBlock<'a> {
    BodyBlock::Line(Line::default())
}

/// Get temperature-based color
pub fn temp_to_color(celsius: f64) -> Color {
    match celsius.round() as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),
        -9..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        31..=40 => Color::Rgb(255, 150, 80),
        _ => Color::Rgb(255, 100, 100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;
    use weather_core::{Condition, Current, Location};

    fn london() -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                name: "London".into(),
                country: "United Kingdom".into(),
                localtime: "2024-05-30 14:00".into(),
            },
            current: Current {
                feelslike_c: 18.2,
                humidity: 60.0,
                wind_kph: 13.0,
                pressure_mb: 1012.0,
                uv: 4.0,
                condition: Condition {
                    text: "Partly cloudy".into(),
                    icon_url: "//cdn.weatherapi.com/weather/64x64/day/116.png".into(),
                },
            },
        }
    }

    fn render(state: &AppState) -> String {
        let mut render = RenderHarness::new(60, 20);
        render.render_to_string_plain(|frame| {
            WeatherPanel.render(frame, frame.area(), WeatherPanelProps { state })
        })
    }

    #[test]
    fn test_idle_prompt() {
        let output = render(&AppState::default());
        assert!(output.contains(IDLE_PROMPT));
    }

    #[test]
    fn test_loading_spinner_advances() {
        let mut state = AppState {
            weather: FetchState::Loading,
            ..Default::default()
        };
        let first = render(&state);
        assert!(first.contains(LOADING_TEXT));
        assert!(first.contains(SPINNERS[0]));

        state.tick_count = 2;
        assert!(render(&state).contains(SPINNERS[1]));
    }

    #[test]
    fn test_error_shows_message_and_hint() {
        let state = AppState {
            weather: FetchState::Error("Failed to fetch weather data".into()),
            ..Default::default()
        };
        let output = render(&state);
        assert!(output.contains("Failed to fetch weather data"));
        assert!(output.contains(RETRY_HINT));
        assert!(!output.contains(IDLE_PROMPT));
    }

    #[test]
    fn test_headline_temperature_keeps_precision() {
        let mut snapshot = london();
        snapshot.current.feelslike_c = 18.25;
        let state = AppState {
            weather: FetchState::Success(snapshot),
            ..Default::default()
        };
        assert!(render(&state).contains("18.25°C"));

        let state = AppState {
            weather: FetchState::Success(london()),
            ..Default::default()
        };
        assert!(render(&state).contains("18.2°C"));
    }

    #[test]
    fn test_temp_to_color_bands() {
        assert_eq!(temp_to_color(-15.0), Color::Rgb(150, 200, 255));
        assert_eq!(temp_to_color(18.2), Color::Rgb(150, 230, 150));
        assert_eq!(temp_to_color(45.0), Color::Rgb(255, 100, 100));
    }
}
