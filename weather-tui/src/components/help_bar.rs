use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::component::Component;

/// Key hints shown along the bottom edge
const HINTS: [(&str, &str); 3] = [("Enter", "search"), ("click", "search"), ("Esc", "quit")];

pub struct HelpBar;

pub struct HelpBarProps;

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let spans = HINTS.iter().flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan).bold()),
                Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)),
            ]
        });
        frame.render_widget(Paragraph::new(Line::from_iter(spans).centered()), area);
    }
}
