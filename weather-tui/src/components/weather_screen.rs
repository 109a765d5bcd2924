//! Root component of the app
//!
//! Search bar on top, results in the middle, key hints at the bottom. Quit
//! keys are handled here; everything else goes to the search bar, which is
//! the only focusable element.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
    Frame,
};
use weather_core::{Action, AppState};

use super::{
    HelpBar, HelpBarProps, SearchBar, SearchBarProps, WeatherPanel, WeatherPanelProps, SPINNERS,
};
use crate::component::Component;
use crate::event::EventKind;

pub struct WeatherScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Debug, Default)]
pub struct WeatherScreen {
    search: SearchBar,
}

impl WeatherScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search
    }
}

fn is_quit(event: &EventKind) -> bool {
    match event {
        EventKind::Key(key) => {
            key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

impl Component for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event<'a>(&mut self, event: &EventKind, props: Self::Props<'a>) -> Vec<Action>
    where
        'a: 'a,
    {
        if is_quit(event) {
            return vec![Action::Quit];
        }

        self.search.handle_event(
            event,
            SearchBarProps {
                query: &props.state.query,
                is_focused: props.is_focused,
            },
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let loading_indicator = if state.weather.is_loading() {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::from(" ")
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ City Weather{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        let inner = outer_block.inner(area);
        frame.render_widget(outer_block, area);

        let [search_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(SearchBar::HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.search.render(
            frame,
            search_area,
            SearchBarProps {
                query: &state.query,
                is_focused: props.is_focused,
            },
        );
        WeatherPanel.render(frame, body_area, WeatherPanelProps { state });
        HelpBar.render(frame, help_area, HelpBarProps);
    }
}
