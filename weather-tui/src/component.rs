use ratatui::{layout::Rect, Frame};
use weather_core::Action;

use crate::event::EventKind;

/// A pure UI component that renders from props and emits actions.
///
/// Components never touch the store. `handle_event` turns terminal input into
/// [`Action`]s for the runtime to dispatch; `render` draws from the borrowed
/// props and nothing else. Components may keep UI-only state such as a cursor
/// position or the last rendered area of a button.
pub trait Component {
    /// Read-only data borrowed from [`weather_core::AppState`]
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
