pub mod coffee;
pub mod leap_year;
pub mod ternary;
pub mod weather;
pub mod word_count;

pub use crate::domain::model::{CupSize, DailyWeather, DrinkType, Extras, Weather, WordCount};
pub use crate::domain::ports::{SourceOfIngredients, WeatherServer};
pub use crate::utils::error::Result;
