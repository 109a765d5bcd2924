//! Actions
//!
//! Naming convention:
//! - Prefix is the category: `WeatherFetch`, `WeatherDidLoad` -> "weather"
//! - "Did" marks the result of async work
//! - Verb last: Change, Fetch, Load

use crate::error::TransportError;
use crate::model::WeatherSnapshot;
use crate::state::RequestId;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Query category =====
    /// City input edited
    QueryChange(String),

    // ===== Weather category =====
    /// Intent: fetch current weather for a city (spawns a task)
    WeatherFetch(String),

    /// Result: the request finished with data
    WeatherDidLoad {
        request: RequestId,
        snapshot: WeatherSnapshot,
    },

    /// Result: the request failed
    WeatherDidError {
        request: RequestId,
        error: TransportError,
    },

    // ===== Uncategorized =====
    /// Periodic tick for the loading animation
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    /// Variant name, for logging and filtering
    pub fn name(&self) -> &'static str {
        match self {
            Action::QueryChange(_) => "QueryChange",
            Action::WeatherFetch(_) => "WeatherFetch",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    pub fn category(&self) -> Option<&'static str> {
        match self {
            Action::QueryChange(_) => Some("query"),
            Action::WeatherFetch(_)
            | Action::WeatherDidLoad { .. }
            | Action::WeatherDidError { .. } => Some("weather"),
            Action::Tick | Action::Quit => None,
        }
    }

    /// Concise one-line description for the action log.
    ///
    /// Snapshots are reduced to location and temperature instead of the full
    /// Debug dump.
    pub fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad { request, snapshot } => format!(
                "WeatherDidLoad {{ request: {}, location: {:?}, feels_like: {:.1}°C }}",
                request, snapshot.location.name, snapshot.current.feelslike_c
            ),
            Action::WeatherDidError { request, error } => format!(
                "WeatherDidError {{ request: {}, kind: {} }}",
                request,
                error.kind()
            ),
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::london;

    #[test]
    fn test_names_and_categories() {
        let fetch = Action::WeatherFetch("London".into());
        assert_eq!(fetch.name(), "WeatherFetch");
        assert_eq!(fetch.category(), Some("weather"));

        let change = Action::QueryChange("Lon".into());
        assert_eq!(change.category(), Some("query"));

        assert_eq!(Action::Tick.category(), None);
    }

    #[test]
    fn test_summary_is_compact() {
        let action = Action::WeatherDidLoad {
            request: RequestId(4),
            snapshot: london(),
        };
        assert_eq!(
            action.summary(),
            "WeatherDidLoad { request: #4, location: \"London\", feels_like: 18.2°C }"
        );

        let action = Action::WeatherDidError {
            request: RequestId(5),
            error: TransportError::Status { status: 403 },
        };
        assert_eq!(
            action.summary(),
            "WeatherDidError { request: #5, kind: status }"
        );

        assert_eq!(Action::Quit.summary(), "Quit");
    }
}
