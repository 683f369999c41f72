use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::KataError;

/// Occurrences of each distinct token in a phrase.
pub type WordCount = HashMap<String, usize>;

/// One weather sample as reported by the weather server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temperature: i16,
    pub wind_direction: u16,
    pub wind_speed: f64,
}

/// Statistics over the four samples of a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    pub date: String,
    pub minimum_temperature: i16,
    pub maximum_temperature: i16,
    pub average_temperature: f64,
    pub average_wind_direction: f64,
    pub maximum_wind_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Americano,
    Cappuccino,
    Latte,
    Marochino,
}

impl DrinkType {
    pub const ALL: [DrinkType; 4] = [
        DrinkType::Americano,
        DrinkType::Cappuccino,
        DrinkType::Latte,
        DrinkType::Marochino,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DrinkType::Americano => "americano",
            DrinkType::Cappuccino => "cappuccino",
            DrinkType::Latte => "latte",
            DrinkType::Marochino => "marochino",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrinkType {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DrinkType::ALL
            .into_iter()
            .find(|drink| drink.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KataError::UnknownDrink(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CupSize {
    Little,
    Big,
}

impl CupSize {
    /// Capacity of the cup in grams.
    pub fn grams(self) -> u32 {
        match self {
            CupSize::Little => 100,
            CupSize::Big => 140,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CupSize::Little => "little",
            CupSize::Big => "big",
        }
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} g)", self.name(), self.grams())
    }
}

impl FromStr for CupSize {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        [CupSize::Little, CupSize::Big]
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KataError::UnknownCupSize(s.to_string()))
    }
}

/// Optional additions dispensed after the recipe itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    pub sugar: u32,
    pub cream: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cup_sizes_in_grams() {
        assert_eq!(CupSize::Little.grams(), 100);
        assert_eq!(CupSize::Big.grams(), 140);
    }

    #[test]
    fn test_drink_names_are_case_insensitive() {
        assert_eq!("Latte".parse::<DrinkType>().unwrap(), DrinkType::Latte);
        assert_eq!(" AMERICANO ".parse::<DrinkType>().unwrap(), DrinkType::Americano);
        assert_eq!("big".parse::<CupSize>().unwrap(), CupSize::Big);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(matches!(
            "espresso".parse::<DrinkType>(),
            Err(KataError::UnknownDrink(name)) if name == "espresso"
        ));
        assert!(matches!(
            "huge".parse::<CupSize>(),
            Err(KataError::UnknownCupSize(name)) if name == "huge"
        ));
    }
}
