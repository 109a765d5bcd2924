//! City input with a search button
//!
//! The query text lives in the store (`AppState::query`); this component only
//! owns the cursor and where the button was last drawn, so it can hit-test
//! mouse clicks.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use weather_core::Action;

use crate::component::Component;
use crate::event::EventKind;

pub const SEARCH_BUTTON_LABEL: &str = "[ Search ]";
pub const QUERY_PLACEHOLDER: &str = "Type a city, e.g. London";

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
}

#[derive(Debug, Default)]
pub struct SearchBar {
    /// Byte offset into the query, always on a char boundary
    cursor: usize,
    button_area: Option<Rect>,
}

impl SearchBar {
    pub const HEIGHT: u16 = 3;
    const BUTTON_WIDTH: u16 = SEARCH_BUTTON_LABEL.len() as u16 + 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Area the button occupied in the last rendered frame
    pub fn button_area(&self) -> Option<Rect> {
        self.button_area
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.cursor].char_indices().next_back()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }

    fn on_button(&self, column: u16, row: u16) -> bool {
        self.button_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

impl Component for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event<'a>(&mut self, event: &EventKind, props: Self::Props<'a>) -> Vec<Action>
    where
        'a: 'a,
    {
        if !props.is_focused {
            return vec![];
        }
        self.clamp_cursor(props.query);

        match event {
            EventKind::Key(key) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match key.code {
                    KeyCode::Char('a') => self.cursor = 0,
                    KeyCode::Char('e') => self.cursor = props.query.len(),
                    KeyCode::Char('u') if !props.query.is_empty() => {
                        self.cursor = 0;
                        return vec![Action::QueryChange(String::new())];
                    }
                    _ => {}
                }
                vec![]
            }
            EventKind::Key(key) => match key.code {
                KeyCode::Char(c) => {
                    vec![Action::QueryChange(self.insert_char(props.query, c))]
                }
                KeyCode::Backspace => self
                    .delete_char_before(props.query)
                    .map(Action::QueryChange)
                    .into_iter()
                    .collect(),
                KeyCode::Delete => self
                    .delete_char_at(props.query)
                    .map(Action::QueryChange)
                    .into_iter()
                    .collect(),
                KeyCode::Left => {
                    self.move_cursor_left(props.query);
                    vec![]
                }
                KeyCode::Right => {
                    self.move_cursor_right(props.query);
                    vec![]
                }
                KeyCode::Home => {
                    self.cursor = 0;
                    vec![]
                }
                KeyCode::End => {
                    self.cursor = props.query.len();
                    vec![]
                }
                KeyCode::Enter => vec![Action::WeatherFetch(props.query.to_string())],
                _ => vec![],
            },
            EventKind::Mouse(mouse)
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self.on_button(mouse.column, mouse.row) =>
            {
                vec![Action::WeatherFetch(props.query.to_string())]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.query);

        let [input_area, button_area] =
            Layout::horizontal([Constraint::Min(8), Constraint::Length(Self::BUTTON_WIDTH)])
                .areas(area);

        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" City ");

        let text = if props.query.is_empty() {
            Paragraph::new(QUERY_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(props.query)
        };
        frame.render_widget(text.block(input_block), input_area);

        let button = Paragraph::new(Line::from(vec![Span::styled(
            SEARCH_BUTTON_LABEL,
            Style::default().fg(Color::Cyan).bold(),
        )]))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(80, 80, 100))),
        );
        frame.render_widget(button, button_area);
        self.button_area = Some(button_area);

        if props.is_focused {
            let column = props.query[..self.cursor].chars().count() as u16;
            let cursor_x = input_area.x + 1 + column;
            let cursor_y = input_area.y + 1;
            if cursor_x < input_area.right().saturating_sub(1) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}
