//! Application state - single source of truth
//!
//! Components receive `&AppState` as props and never mutate it. Only the
//! reducer writes here.

use crate::model::WeatherSnapshot;

/// The only message the UI ever shows for a failed fetch
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch weather data";

/// Outcome of the most recent fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Last request produced data
    Success(T),
    /// Last request failed; carries a user-facing message
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Variant name, for logs
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success(_) => "success",
            FetchState::Error(_) => "error",
        }
    }
}

/// Sequence number handed out for every fetch.
///
/// Results carry the id of the request that produced them; anything older
/// than [`AppState::latest_request`] is dropped by the reducer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn next(self) -> Self {
        RequestId(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the UI needs to render
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Current content of the city input
    pub query: String,

    /// Outcome of the latest fetch
    pub weather: FetchState<WeatherSnapshot>,

    /// Id of the most recently issued fetch
    pub latest_request: RequestId,

    /// Animation frame counter (for the loading spinner)
    pub tick_count: u32,
}

impl AppState {
    /// State with the input pre-filled
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}
