use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weather_core::Location;

use super::LOCATION_ICON;
use crate::component::Component;

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a Location,
}

impl LocationHeader {
    pub const HEIGHT: u16 = 1;
}

impl Component for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let line = Line::from(vec![
            Span::raw(LOCATION_ICON),
            Span::styled(
                props.location.name.as_str(),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(", ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                props.location.country.as_str(),
                Style::default().fg(Color::Gray),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(line), area);
    }
}
