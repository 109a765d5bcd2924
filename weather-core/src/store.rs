//! Weather state store
//!
//! Holds the [`AppState`], runs the reducer for every action, and publishes
//! the fetch outcome on a `watch` channel so observers see each transition.
//! The store is the only writer; everything else reads.

use tokio::sync::watch;

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::model::WeatherSnapshot;
use crate::reducer::reducer;
use crate::state::{AppState, FetchState};

/// Reducer signature the store runs
pub type Reducer = fn(&mut AppState, Action) -> DispatchResult<Effect>;

/// Hooks around every dispatch
///
/// Implement this to add logging or other cross-cutting concerns.
pub trait Middleware {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &Action);

    /// Called after the reducer ran
    fn after(&mut self, action: &Action, state_changed: bool);
}

/// A middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl Middleware for NoopMiddleware {
    fn before(&mut self, _action: &Action) {}
    fn after(&mut self, _action: &Action, _state_changed: bool) {}
}

/// Logs every action through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
    /// Skip `Tick`, which fires several times a second
    pub skip_ticks: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only, ticks skipped
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
            skip_ticks: true,
        }
    }

    /// Log both before and after, ticks included
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
            skip_ticks: false,
        }
    }

    fn wants(&self, action: &Action) -> bool {
        !(self.skip_ticks && matches!(action, Action::Tick))
    }
}

impl Middleware for LoggingMiddleware {
    fn before(&mut self, action: &Action) {
        if self.log_before && self.wants(action) {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &Action, state_changed: bool) {
        if self.log_after && self.wants(action) {
            tracing::debug!(
                action = %action.name(),
                summary = %action.summary(),
                state_changed,
                "Action processed"
            );
        }
    }
}

/// Centralized store for the weather screen
pub struct WeatherStore<M: Middleware = NoopMiddleware> {
    state: AppState,
    reducer: Reducer,
    middleware: M,
    weather_tx: watch::Sender<FetchState<WeatherSnapshot>>,
}

impl WeatherStore<NoopMiddleware> {
    /// Store with the default reducer and no middleware
    pub fn new(state: AppState) -> Self {
        Self::with_middleware(state, NoopMiddleware)
    }
}

impl<M: Middleware> WeatherStore<M> {
    pub fn with_middleware(state: AppState, middleware: M) -> Self {
        let (weather_tx, _) = watch::channel(state.weather.clone());
        Self {
            state,
            reducer,
            middleware,
            weather_tx,
        }
    }

    /// Dispatch an action through middleware and reducer.
    ///
    /// Observers are notified before this returns, so a `Loading` caused by
    /// `WeatherFetch` is visible before the caller runs the fetch effect.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult<Effect> {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);

        if result.changed {
            let weather = &self.state.weather;
            self.weather_tx.send_if_modified(|published| {
                if published == weather {
                    false
                } else {
                    *published = weather.clone();
                    true
                }
            });
        }
        result
    }

    /// Convenience for `dispatch(Action::WeatherFetch(city))`
    pub fn fetch(&mut self, city: impl Into<String>) -> DispatchResult<Effect> {
        self.dispatch(Action::WeatherFetch(city.into()))
    }

    /// Subscribe to fetch outcome changes.
    ///
    /// The receiver starts out holding the current value.
    pub fn observe(&self) -> watch::Receiver<FetchState<WeatherSnapshot>> {
        self.weather_tx.subscribe()
    }

    /// Current fetch outcome
    pub fn fetch_state(&self) -> &FetchState<WeatherSnapshot> {
        &self.state.weather
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::fixtures::london;
    use crate::state::{RequestId, FETCH_ERROR_MESSAGE};

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        changed_count: usize,
    }

    impl Middleware for CountingMiddleware {
        fn before(&mut self, _action: &Action) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &Action, state_changed: bool) {
            self.after_count += 1;
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_starts_idle() {
        let store = WeatherStore::new(AppState::default());
        assert!(store.fetch_state().is_idle());
        assert!(store.observe().borrow().is_idle());
    }

    #[test]
    fn test_fetch_publishes_loading_before_effect_runs() {
        let mut store = WeatherStore::new(AppState::default());
        let mut rx = store.observe();

        let result = store.fetch("London");

        // effect not executed yet, observers already see Loading
        assert_eq!(result.effects.len(), 1);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), FetchState::Loading);
    }

    #[test]
    fn test_observer_sees_terminal_state() {
        let mut store = WeatherStore::new(AppState::default());
        let mut rx = store.observe();

        store.fetch("London");
        rx.borrow_and_update();
        store.dispatch(Action::WeatherDidLoad {
            request: RequestId(1),
            snapshot: london(),
        });

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().data(), Some(&london()));
    }

    #[test]
    fn test_query_change_does_not_notify_observers() {
        let mut store = WeatherStore::new(AppState::default());
        let rx = store.observe();

        assert!(store.dispatch(Action::QueryChange("Ber".into())).changed);

        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.state().query, "Ber");
    }

    #[test]
    fn test_stale_result_does_not_notify_observers() {
        let mut store = WeatherStore::new(AppState::default());
        store.fetch("London");
        store.fetch("Paris");
        let rx = store.observe();

        store.dispatch(Action::WeatherDidError {
            request: RequestId(1),
            error: TransportError::EmptyBody,
        });

        assert!(!rx.has_changed().unwrap());
        assert!(store.fetch_state().is_loading());

        store.dispatch(Action::WeatherDidError {
            request: RequestId(2),
            error: TransportError::EmptyBody,
        });
        assert_eq!(store.fetch_state().error(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn test_middleware_hooks() {
        let mut store =
            WeatherStore::with_middleware(AppState::default(), CountingMiddleware::default());

        store.dispatch(Action::QueryChange("a".into()));
        store.dispatch(Action::QueryChange("a".into()));
        store.dispatch(Action::Tick);

        assert_eq!(store.middleware().before_count, 3);
        assert_eq!(store.middleware().after_count, 3);
        assert_eq!(store.middleware().changed_count, 1);
    }

    #[test]
    fn test_logging_middleware_skips_ticks() {
        let middleware = LoggingMiddleware::new();
        assert!(!middleware.wants(&Action::Tick));
        assert!(middleware.wants(&Action::Quit));
        assert!(LoggingMiddleware::verbose().wants(&Action::Tick));
    }
}
