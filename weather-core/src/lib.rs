//! Core of the city weather TUI
//!
//! Redux-style state management for a single screen that looks up current
//! weather by city name:
//!
//! - **Action**: what happened (`WeatherFetch`, `WeatherDidLoad`, ...)
//! - **Reducer**: pure state transition that may request effects
//! - **Effect**: declarative I/O request (`FetchWeather`)
//! - **Store**: owns the state, runs middleware, publishes the fetch outcome
//! - **TaskManager**: runs effect tasks scoped to the screen
//! - **WeatherApi**: the one REST endpoint, behind a trait
//!
//! # Flow
//!
//! ```ignore
//! let mut store = WeatherStore::new(AppState::default());
//! let fetcher = WeatherFetcher::new(Arc::new(HttpWeatherClient::new(&config)), config.api_key());
//!
//! // Loading is published before the request goes out
//! for effect in store.fetch("London").effects {
//!     fetcher.handle(effect, &mut tasks);
//! }
//!
//! // later, from the action channel
//! store.dispatch(action);
//! ```

pub mod action;
pub mod client;
pub mod config;
pub mod effect;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod reducer;
pub mod state;
pub mod store;
pub mod tasks;

#[cfg(test)]
mod fixtures;

pub use action::Action;
pub use client::{decode_response, HttpWeatherClient, WeatherApi};
pub use config::{WeatherConfig, DEFAULT_BASE_URL};
pub use effect::{DispatchResult, Effect};
pub use error::{ConfigError, TransportError};
pub use fetcher::{run_fetch, WeatherFetcher, WEATHER_TASK};
pub use model::{Condition, Current, Location, WeatherSnapshot};
pub use reducer::reducer;
pub use state::{AppState, FetchState, RequestId, FETCH_ERROR_MESSAGE};
pub use store::{LoggingMiddleware, Middleware, NoopMiddleware, WeatherStore};
pub use tasks::{TaskKey, TaskManager};
