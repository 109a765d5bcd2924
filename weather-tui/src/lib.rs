//! Terminal front end for the city weather lookup
//!
//! One screen: a city input with a search button, the result of the latest
//! fetch below it, and key hints at the bottom. State and I/O live in
//! `weather_core`; this crate turns terminal input into actions and draws
//! frames from the state.

pub mod component;
pub mod components;
pub mod event;
pub mod logging;
pub mod runtime;
pub mod testing;

pub use component::Component;
pub use event::EventKind;
pub use runtime::{Flow, RuntimeConfig, WeatherRuntime};
