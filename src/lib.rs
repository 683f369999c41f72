pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FakeWeatherServer, IngredientCall, RecordingIngredients};
pub use config::KataConfig;
pub use crate::core::{
    coffee::CoffeeMachine,
    leap_year::is_leap_year,
    ternary::{decode_ternary, decode_ternary_digit},
    weather::{parse_weather, WeatherClient},
    word_count::{count_words, tally},
};
pub use domain::model::{CupSize, DailyWeather, DrinkType, Extras, Weather, WordCount};
pub use domain::ports::{SourceOfIngredients, WeatherServer};
pub use utils::error::{KataError, Result};
