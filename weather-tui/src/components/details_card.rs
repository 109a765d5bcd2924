//! Bordered card with the secondary readings, two per row

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use weather_core::WeatherSnapshot;

use crate::component::Component;

/// Shown when the API's local time has no time part
const MISSING_VALUE: &str = "--";

pub struct DetailsCard;

pub struct DetailsCardProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

impl DetailsCard {
    const ROWS: u16 = 3;
    /// Value line and label line per row, plus the border
    pub const HEIGHT: u16 = Self::ROWS * 2 + 2;
    pub const WIDTH: u16 = 44;
}

/// A reading as decoded: whole numbers keep one decimal (`13.0`), anything
/// finer is printed in full (`18.25`)
pub fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Percentage without a trailing `.0` for whole numbers (`60%`, `60.5%`)
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value}%")
    }
}

/// Label and formatted value for each reading, in display order
pub fn detail_entries(snapshot: &WeatherSnapshot) -> [(&'static str, String); 6] {
    let current = &snapshot.current;
    let location = &snapshot.location;
    [
        ("Humidity", format_percent(current.humidity)),
        ("Wind", format!("{} km/h", format_reading(current.wind_kph))),
        ("Pressure", format!("{} hPa", format_reading(current.pressure_mb))),
        ("UV Index", format_reading(current.uv)),
        (
            "Local Time",
            location.local_time().unwrap_or(MISSING_VALUE).to_string(),
        ),
        ("Date", location.local_date()),
    ]
}

impl Component for DetailsCard {
    type Props<'a> = DetailsCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Details ")
            .title_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows =
            Layout::vertical([Constraint::Length(2); DetailsCard::ROWS as usize]).split(inner);
        let entries = detail_entries(props.snapshot);

        for (row, pair) in rows.iter().zip(entries.chunks(2)) {
            let cells = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row);
            for (cell, (label, value)) in cells.iter().zip(pair) {
                let text = vec![
                    Line::from(Span::styled(
                        value.as_str(),
                        Style::default().fg(Color::White).bold(),
                    ))
                    .centered(),
                    Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray)))
                        .centered(),
                ];
                frame.render_widget(Paragraph::new(text), *cell);
            }
        }
    }
}
