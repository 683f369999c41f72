use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Failed to parse weather record '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Unknown drink: {0}")]
    UnknownDrink(String),

    #[error("Unknown cup size: {0}")]
    UnknownCupSize(String),

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl KataError {
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        KataError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::Parse { .. }
            | KataError::UnknownDrink(_)
            | KataError::UnknownCupSize(_)
            | KataError::InvalidDate { .. } => ErrorCategory::Input,
            KataError::TomlError(_)
            | KataError::ConfigError { .. }
            | KataError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            KataError::IoError(_) | KataError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::Parse { input, .. } if input.is_empty() => {
                "The weather server has no data for the requested date".to_string()
            }
            KataError::Parse { .. } => "The weather server answered with a malformed record".to_string(),
            KataError::UnknownDrink(name) => format!("'{}' is not on the menu", name),
            KataError::UnknownCupSize(name) => format!("There is no '{}' cup", name),
            KataError::InvalidDate { value, .. } => format!("'{}' is not a valid date", value),
            KataError::IoError(_) => "Could not read the configuration file".to_string(),
            KataError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            KataError::SerializationError(_) => "Could not render the result as JSON".to_string(),
            KataError::ConfigError { message } => format!("Configuration problem: {}", message),
            KataError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KataError::Parse { .. } => {
                "Request one of the recorded dates or add responses under [weather.responses]"
            }
            KataError::UnknownDrink(_) => "Choose one of: americano, cappuccino, latte, marochino",
            KataError::UnknownCupSize(_) => "Choose one of: little, big",
            KataError::InvalidDate { .. } => "Use the DD.MM.YYYY format, e.g. 31.08.2018",
            KataError::IoError(_) => "Check that the --config path exists and is readable",
            KataError::TomlError(_)
            | KataError::ConfigError { .. }
            | KataError::InvalidConfigValueError { .. } => "Fix the configuration file and try again",
            KataError::SerializationError(_) => "Run again without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
