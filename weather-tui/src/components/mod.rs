pub mod details_card;
pub mod help_bar;
pub mod location_header;
pub mod search_bar;
pub mod weather_panel;
pub mod weather_screen;

pub use details_card::{
    detail_entries, format_percent, format_reading, DetailsCard, DetailsCardProps,
};
pub use help_bar::{HelpBar, HelpBarProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps, SEARCH_BUTTON_LABEL};
pub use weather_panel::{WeatherPanel, WeatherPanelProps, IDLE_PROMPT, LOADING_TEXT, RETRY_HINT};
pub use weather_screen::{WeatherScreen, WeatherScreenProps};

pub const LOCATION_ICON: &str = "📍 ";
pub const ERROR_ICON: &str = "⚠";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
