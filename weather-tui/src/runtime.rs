//! Main loop: terminal events and actions in, frames and fetch tasks out
//!
//! ```text
//! crossterm ──► poller ──► WeatherScreen::handle_event ──┐
//!                                                        ▼
//!   tick ──────────────────────────────────────► WeatherStore::dispatch
//!                                                        │
//!   fetch task ◄──────── WeatherFetcher ◄──────── effects
//!        └──── result action ──► action channel ──► dispatch
//! ```
//!
//! Actions from input are dispatched before the next event is read, so each
//! key is handled against the query the previous key produced.
//!
//! Fetch tasks live in a [`TaskManager`] scoped to this runtime. They are
//! cancelled when the loop exits, so no result is delivered to a screen that
//! is gone.

use std::io;
use std::time::Duration;

use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use weather_core::{Action, AppState, Middleware, TaskManager, WeatherFetcher, WeatherStore};

use crate::component::Component;
use crate::components::{WeatherScreen, WeatherScreenProps};
use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};

/// Spinner frame interval
pub const LOADING_ANIM_TICK_MS: u64 = 100;

/// Timing of the event poller and the animation tick
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Timeout passed to each `crossterm::event::poll` call.
    pub poll_timeout: Duration,
    /// Sleep between poll cycles.
    pub loop_sleep: Duration,
    /// Interval between `Action::Tick`s.
    pub tick_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
            tick_interval: Duration::from_millis(LOADING_ANIM_TICK_MS),
        }
    }
}

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue { render: bool },
    Quit,
}

pub struct WeatherRuntime<M: Middleware> {
    store: WeatherStore<M>,
    fetcher: WeatherFetcher,
    tasks: TaskManager,
    scope: CancellationToken,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    config: RuntimeConfig,
}

impl<M: Middleware> WeatherRuntime<M> {
    pub fn new(store: WeatherStore<M>, fetcher: WeatherFetcher) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let scope = CancellationToken::new();
        let tasks = TaskManager::new(action_tx.clone(), scope.child_token());
        Self {
            store,
            fetcher,
            tasks,
            scope,
            action_tx,
            action_rx,
            config: RuntimeConfig::default(),
        }
    }

    /// Queue an action to be dispatched once the loop runs
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store(&self) -> &WeatherStore<M> {
        &self.store
    }

    /// Dispatch one action and hand its effects to the fetcher
    pub fn dispatch(&mut self, action: Action) -> Flow {
        if matches!(action, Action::Quit) {
            return Flow::Quit;
        }

        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.fetcher.handle(effect, &mut self.tasks);
        }
        Flow::Continue {
            render: result.changed,
        }
    }

    /// Map one terminal event to actions and dispatch them in order
    pub fn handle_event(&mut self, screen: &mut WeatherScreen, event: &EventKind) -> Flow {
        // keys can move the search bar's cursor without producing an action
        let mut render = matches!(event, EventKind::Key(_) | EventKind::Resize(..));

        let actions = screen.handle_event(
            event,
            WeatherScreenProps {
                state: self.store.state(),
                is_focused: true,
            },
        );
        for action in actions {
            match self.dispatch(action) {
                Flow::Quit => return Flow::Quit,
                Flow::Continue { render: changed } => render |= changed,
            }
        }
        Flow::Continue { render }
    }

    /// Run until `Action::Quit`, the action channel closing, or a terminal error
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        screen: &mut WeatherScreen,
    ) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let poller_token = self.scope.child_token();
        let _poller = spawn_event_poller(
            event_tx,
            self.config.poll_timeout,
            self.config.loop_sleep,
            poller_token,
        );

        let mut ticks = tokio::time::interval(self.config.tick_interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let result = self.event_loop(terminal, screen, &mut event_rx, &mut ticks).await;

        info!("Shutting down, cancelling {} running task(s)", self.tasks.len());
        self.tasks.cancel_all();
        self.scope.cancel();
        result
    }

    async fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        screen: &mut WeatherScreen,
        event_rx: &mut mpsc::UnboundedReceiver<RawEvent>,
        ticks: &mut tokio::time::Interval,
    ) -> io::Result<()> {
        let mut should_render = true;

        loop {
            if should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    screen.render(
                        frame,
                        frame.area(),
                        WeatherScreenProps {
                            state,
                            is_focused: true,
                        },
                    )
                })?;
                should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let Some(event) = process_raw_event(raw_event) else {
                        continue;
                    };
                    match self.handle_event(screen, &event) {
                        Flow::Quit => break,
                        Flow::Continue { render } => should_render |= render,
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    match self.dispatch(action) {
                        Flow::Quit => break,
                        Flow::Continue { render } => should_render |= render,
                    }
                }

                _ = ticks.tick() => {
                    if let Flow::Continue { render: true } = self.dispatch(Action::Tick) {
                        should_render = true;
                    }
                }

                else => {
                    debug!("All input channels closed");
                    break;
                }
            }
        }

        Ok(())
    }
}
