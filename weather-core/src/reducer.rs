//! Reducer - (state, action) -> (changed, effects)
//!
//! All state mutations happen here. I/O is only ever requested, through
//! [`Effect`], never performed.

use tracing::{debug, warn};

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::{AppState, FetchState, RequestId, FETCH_ERROR_MESSAGE};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherFetch(city) => {
            let request = state.latest_request.next();
            state.latest_request = request;
            state.weather = FetchState::Loading;
            DispatchResult::changed_with(Effect::FetchWeather { request, city })
        }

        Action::WeatherDidLoad { request, snapshot } => {
            if is_stale(state, request) {
                return DispatchResult::unchanged();
            }
            state.weather = FetchState::Success(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, error } => {
            if is_stale(state, request) {
                return DispatchResult::unchanged();
            }
            warn!(
                %request,
                kind = error.kind(),
                %error,
                "Weather fetch failed"
            );
            state.weather = FetchState::Error(FETCH_ERROR_MESSAGE.to_string());
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only the spinner animates
            if state.weather.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn is_stale(state: &AppState, request: RequestId) -> bool {
    if request != state.latest_request {
        debug!(
            %request,
            latest = %state.latest_request,
            "Discarding stale weather response"
        );
        return true;
    }
    false
}
