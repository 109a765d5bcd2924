//! WeatherAPI.com `current.json` payload
//!
//! The snapshot is decoded straight from the response body and never mutated
//! afterwards. The view only needs a handful of derived strings, which live
//! here as plain functions so they can be tested without a terminal.

use serde::Deserialize;

/// Resolution token in the icon path returned by the API
const LOW_RES_ICON: &str = "64x64";
/// Resolution token the view asks for instead
const HIGH_RES_ICON: &str = "128x128";

/// Immutable point-in-time weather reading for one location
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: Current,
}

/// Where the reading was taken
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// Local wall clock at the location, `YYYY-MM-DD HH:MM`
    pub localtime: String,
}

impl Location {
    /// Time of day: everything after the first space of `localtime`
    pub fn local_time(&self) -> Option<&str> {
        self.localtime.split_once(' ').map(|(_, time)| time)
    }

    /// Date part of `localtime` reformatted from `YYYY-MM-DD` to `DD-MM-YYYY`
    pub fn local_date(&self) -> String {
        let date = self
            .localtime
            .split_once(' ')
            .map_or(self.localtime.as_str(), |(date, _)| date);
        date.split('-').rev().collect::<Vec<_>>().join("-")
    }
}

/// Current conditions
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Current {
    pub feelslike_c: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    pub wind_kph: f64,
    pub pressure_mb: f64,
    pub uv: f64,
    pub condition: Condition,
}

/// Human readable condition plus its icon
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Condition {
    pub text: String,
    /// Protocol-relative path, e.g. `//cdn.weatherapi.com/weather/64x64/day/116.png`
    #[serde(rename = "icon")]
    pub icon_url: String,
}

impl Condition {
    /// High resolution, absolute icon URL
    pub fn hi_res_icon_url(&self) -> String {
        let upgraded = self.icon_url.replace(LOW_RES_ICON, HIGH_RES_ICON);
        if upgraded.starts_with("//") {
            format!("https:{upgraded}")
        } else {
            upgraded
        }
    }
}
