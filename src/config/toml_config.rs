use crate::adapters::FakeWeatherServer;
use crate::core::weather::{parse_date, FIELD_SEPARATOR, SAMPLE_TIMES};
use crate::core::word_count::WORD_SEPARATOR;
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_single_char, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KataConfig {
    #[serde(default)]
    pub word_count: WordCountConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordCountConfig {
    pub separator: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Serve the responses recorded from the real server as well.
    #[serde(default = "default_true")]
    pub include_recorded: bool,
    /// Extra `"DD.MM.YYYY;HH:MM" = "temp;dir;speed"` pairs.
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            include_recorded: true,
            responses: BTreeMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl KataConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${WEATHER_RESPONSE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn separator(&self) -> Result<char> {
        match &self.word_count.separator {
            Some(separator) => validate_single_char("word_count.separator", separator),
            None => Ok(WORD_SEPARATOR),
        }
    }

    pub fn weather_server(&self) -> FakeWeatherServer {
        let mut server = if self.weather.include_recorded {
            FakeWeatherServer::with_recorded_history()
        } else {
            FakeWeatherServer::new()
        };
        server.extend(self.weather.responses.clone());
        server
    }

    fn validate_request(request: &str) -> Result<()> {
        let field = format!("weather.responses.\"{}\"", request);
        let invalid = |reason: &str| KataError::InvalidConfigValueError {
            field: field.clone(),
            value: request.to_string(),
            reason: reason.to_string(),
        };

        let (date, time) = request
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| invalid("expected DD.MM.YYYY;HH:MM"))?;
        parse_date(date).map_err(|e| invalid(&e.to_string()))?;
        if !SAMPLE_TIMES.contains(&time) {
            return Err(invalid(&format!(
                "time must be one of {}",
                SAMPLE_TIMES.join(", ")
            )));
        }
        Ok(())
    }
}

impl Validate for KataConfig {
    fn validate(&self) -> Result<()> {
        self.separator()?;

        for (request, response) in &self.weather.responses {
            Self::validate_request(request)?;
            validate_non_empty_string(&format!("weather.responses.\"{}\"", request), response)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::WeatherServer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = KataConfig::from_toml_str("").unwrap();
        assert_eq!(config.separator().unwrap(), ' ');
        assert!(config.weather.include_recorded);
        assert_eq!(config.weather_server().len(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[word_count]
separator = ","

[weather]
include_recorded = false

[weather.responses]
"03.09.2018;03:00" = "18;90;2.0"
"03.09.2018;09:00" = "21;95;2.5"
"#;

        let config = KataConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.separator().unwrap(), ',');

        let server = config.weather_server();
        assert_eq!(server.len(), 2);
        assert_eq!(server.get_weather("03.09.2018;09:00"), "21;95;2.5");
        assert_eq!(server.get_weather("31.08.2018;03:00"), "");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TDD_KATAS_TEST_RESPONSE", "5;10;1.5");

        let toml_content = r#"
[weather.responses]
"04.09.2018;15:00" = "${TDD_KATAS_TEST_RESPONSE}"
"#;

        let config = KataConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.weather.responses["04.09.2018;15:00"], "5;10;1.5");

        std::env::remove_var("TDD_KATAS_TEST_RESPONSE");
    }

    #[test]
    fn test_multi_char_separator_is_rejected() {
        let config = KataConfig::from_toml_str("[word_count]\nseparator = \"--\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_response_outside_sample_times_is_rejected() {
        let config =
            KataConfig::from_toml_str("[weather.responses]\n\"03.09.2018;12:00\" = \"1;1;1\"\n")
                .unwrap();
        assert!(matches!(
            config.validate(),
            Err(KataError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_response_with_bad_date_is_rejected() {
        let config =
            KataConfig::from_toml_str("[weather.responses]\n\"2018-09-03;03:00\" = \"1;1;1\"\n")
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            KataConfig::from_toml_str("[word_count"),
            Err(KataError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[word_count]\nseparator = \";\"\n")
            .unwrap();

        let config = KataConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.separator().unwrap(), ';');
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            KataConfig::from_file("/definitely/not/here.toml"),
            Err(KataError::IoError(_))
        ));
    }
}
