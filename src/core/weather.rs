use chrono::NaiveDate;

use crate::core::{DailyWeather, Result, Weather, WeatherServer};
use crate::utils::error::KataError;
use crate::utils::validation::validate_range;

pub const FIELD_SEPARATOR: char = ';';
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The server only stores weather for these times of every date.
pub const SAMPLE_TIMES: [&str; 4] = ["03:00", "09:00", "15:00", "21:00"];

const MAX_WIND_DIRECTION: u16 = 359;

/// Parses a `"<temperature>;<wind direction>;<wind speed>"` record.
pub fn parse_weather(response: &str) -> Result<Weather> {
    let fields: Vec<&str> = response.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() != 3 {
        return Err(KataError::parse(
            response,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }

    let temperature: i16 = fields[0]
        .parse()
        .map_err(|e| KataError::parse(response, format!("temperature '{}': {}", fields[0], e)))?;

    let wind_direction: u16 = fields[1].parse().map_err(|e| {
        KataError::parse(response, format!("wind direction '{}': {}", fields[1], e))
    })?;
    validate_range("wind_direction", wind_direction, 0, MAX_WIND_DIRECTION)
        .map_err(|e| KataError::parse(response, e.to_string()))?;

    let wind_speed: f64 = fields[2]
        .parse()
        .map_err(|e| KataError::parse(response, format!("wind speed '{}': {}", fields[2], e)))?;
    if !wind_speed.is_finite() || wind_speed < 0.0 {
        return Err(KataError::parse(
            response,
            format!("wind speed must be a non-negative number, got {}", wind_speed),
        ));
    }

    Ok(Weather {
        temperature,
        wind_direction,
        wind_speed,
    })
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| KataError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Daily statistics computed from a [`WeatherServer`].
///
/// Every statistic asks the server for all four samples of the date again;
/// nothing is cached between calls.
pub struct WeatherClient<S: WeatherServer> {
    server: S,
}

impl<S: WeatherServer> WeatherClient<S> {
    pub fn new(server: S) -> Self {
        Self { server }
    }

    pub fn server(&self) -> &S {
        &self.server
    }

    pub fn minimum_temperature(&self, date: NaiveDate) -> Result<i16> {
        let samples = self.fetch_day(date)?;
        Ok(min_temperature(&samples))
    }

    pub fn maximum_temperature(&self, date: NaiveDate) -> Result<i16> {
        let samples = self.fetch_day(date)?;
        Ok(max_temperature(&samples))
    }

    pub fn average_temperature(&self, date: NaiveDate) -> Result<f64> {
        let samples = self.fetch_day(date)?;
        Ok(average(samples.iter().map(|w| f64::from(w.temperature))))
    }

    /// Arithmetic mean of the four directions in degrees.
    pub fn average_wind_direction(&self, date: NaiveDate) -> Result<f64> {
        let samples = self.fetch_day(date)?;
        Ok(average(samples.iter().map(|w| f64::from(w.wind_direction))))
    }

    pub fn maximum_wind_speed(&self, date: NaiveDate) -> Result<f64> {
        let samples = self.fetch_day(date)?;
        Ok(max_wind_speed(&samples))
    }

    /// All statistics from a single round of requests.
    pub fn daily_report(&self, date: NaiveDate) -> Result<DailyWeather> {
        let samples = self.fetch_day(date)?;
        Ok(DailyWeather {
            date: date.format(DATE_FORMAT).to_string(),
            minimum_temperature: min_temperature(&samples),
            maximum_temperature: max_temperature(&samples),
            average_temperature: average(samples.iter().map(|w| f64::from(w.temperature))),
            average_wind_direction: average(samples.iter().map(|w| f64::from(w.wind_direction))),
            maximum_wind_speed: max_wind_speed(&samples),
        })
    }

    fn fetch_day(&self, date: NaiveDate) -> Result<Vec<Weather>> {
        let day = date.format(DATE_FORMAT).to_string();
        SAMPLE_TIMES
            .iter()
            .map(|time| {
                let request = format!("{}{}{}", day, FIELD_SEPARATOR, time);
                tracing::debug!("Requesting weather for {}", request);
                let response = self.server.get_weather(&request);
                if response.is_empty() {
                    tracing::warn!("Weather server has no data for {}", request);
                }
                parse_weather(&response)
            })
            .collect()
    }
}

fn min_temperature(samples: &[Weather]) -> i16 {
    samples.iter().map(|w| w.temperature).min().unwrap_or_default()
}

fn max_temperature(samples: &[Weather]) -> i16 {
    samples.iter().map(|w| w.temperature).max().unwrap_or_default()
}

fn max_wind_speed(samples: &[Weather]) -> f64 {
    samples.iter().map(|w| w.wind_speed).fold(0.0, f64::max)
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let weather = parse_weather("20;181;5.1").unwrap();
        assert_eq!(weather.temperature, 20);
        assert_eq!(weather.wind_direction, 181);
        assert!((weather.wind_speed - 5.1).abs() < 0.01);
    }

    #[test]
    fn test_parse_negative_temperature() {
        let weather = parse_weather("-7;0;1").unwrap();
        assert_eq!(weather.temperature, -7);
    }

    #[test]
    fn test_parse_integer_wind_speed() {
        let weather = parse_weather("1;1;1").unwrap();
        assert_eq!(weather.wind_speed, 1.0);
    }

    #[test]
    fn test_too_few_fields() {
        assert!(matches!(parse_weather("1"), Err(KataError::Parse { .. })));
        assert!(matches!(parse_weather("1;2"), Err(KataError::Parse { .. })));
    }

    #[test]
    fn test_empty_response_is_an_error() {
        assert!(matches!(parse_weather(""), Err(KataError::Parse { .. })));
    }

    #[test]
    fn test_too_many_fields() {
        assert!(parse_weather("1;1;1;1").is_err());
    }

    #[test]
    fn test_wind_direction_out_of_range() {
        assert!(matches!(parse_weather("1;360;1"), Err(KataError::Parse { .. })));
        assert!(parse_weather("1;-1;1").is_err());
        assert!(parse_weather("1;359;1").is_ok());
    }

    #[test]
    fn test_non_numeric_fields() {
        assert!(parse_weather("warm;1;1").is_err());
        assert!(parse_weather("1;north;1").is_err());
        assert!(parse_weather("1;1;fast").is_err());
        assert!(parse_weather("1;1;-0.5").is_err());
        assert!(parse_weather("1;1;NaN").is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("31.08.2018").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2018, 8, 31).unwrap());
        assert!(matches!(parse_date("2018-08-31"), Err(KataError::InvalidDate { .. })));
        assert!(parse_date("31.02.2018").is_err());
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        assert_eq!(average(std::iter::empty()), 0.0);
    }
}
