//! Shared test data

use crate::model::{Condition, Current, Location, WeatherSnapshot};

pub(crate) const LONDON_JSON: &str = r#"{
    "location": {
        "name": "London",
        "region": "City of London, Greater London",
        "country": "United Kingdom",
        "localtime": "2024-05-30 14:00"
    },
    "current": {
        "temp_c": 19.0,
        "feelslike_c": 18.2,
        "humidity": 60,
        "wind_kph": 13.0,
        "pressure_mb": 1012.0,
        "uv": 4.0,
        "condition": {
            "text": "Partly cloudy",
            "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
            "code": 1003
        }
    }
}"#;

pub(crate) fn london() -> WeatherSnapshot {
    WeatherSnapshot {
        location: Location {
            name: "London".into(),
            country: "United Kingdom".into(),
            localtime: "2024-05-30 14:00".into(),
        },
        current: Current {
            feelslike_c: 18.2,
            humidity: 60.0,
            wind_kph: 13.0,
            pressure_mb: 1012.0,
            uv: 4.0,
            condition: Condition {
                text: "Partly cloudy".into(),
                icon_url: "//cdn.weatherapi.com/weather/64x64/day/116.png".into(),
            },
        },
    }
}
