//! Terminal events
//!
//! A poller task reads crossterm events and forwards them over a channel so
//! the UI loop can `select!` on input, actions and timers together.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Event payload handed to components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Key press
    Key(KeyEvent),
    /// Mouse event other than scrolling
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Spawn the event polling task with cancellation support
///
/// # Arguments
/// * `tx` - Channel to send raw events
/// * `poll_timeout` - Timeout for each poll operation
/// * `loop_sleep` - Sleep duration between poll cycles
/// * `cancel_token` - Token to cancel the polling task
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Process a raw event into an [`EventKind`].
///
/// Key releases and repeats (reported on Windows) and scroll wheel events
/// are dropped; nothing on this screen reacts to them.
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind == KeyEventKind::Press => Some(EventKind::Key(key)),
        RawEvent::Key(_) => None,
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => None,
            _ => Some(EventKind::Mouse(mouse)),
        },
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseButton};

    fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_process_raw_event_key() {
        let kind = process_raw_event(RawEvent::Key(key_with_kind(KeyEventKind::Press)));
        assert!(matches!(kind, Some(EventKind::Key(_))));
    }

    #[test]
    fn test_process_raw_event_drops_release() {
        assert_eq!(
            process_raw_event(RawEvent::Key(key_with_kind(KeyEventKind::Release))),
            None
        );
    }

    #[test]
    fn test_process_raw_event_mouse() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            process_raw_event(RawEvent::Mouse(click)),
            Some(EventKind::Mouse(click))
        );

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click
        };
        assert_eq!(process_raw_event(RawEvent::Mouse(scroll)), None);
    }

    #[test]
    fn test_process_raw_event_resize() {
        assert_eq!(
            process_raw_event(RawEvent::Resize(80, 24)),
            Some(EventKind::Resize(80, 24))
        );
    }
}
