use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensusError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot parse numeral '{input}': {reason}")]
    ParseNumeralError { input: String, reason: String },
}

impl CensusError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CensusError::IoError(e) => format!("無法讀取檔案: {}", e),
            CensusError::CsvError(e) => format!("CSV 名單格式錯誤: {}", e),
            CensusError::SerializationError(e) => format!("無法輸出 JSON: {}", e),
            CensusError::ConfigParseError { message } => format!("設定檔格式錯誤: {}", message),
            CensusError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值 '{}' 不正確: {}", field, reason)
            }
            CensusError::ParseNumeralError { input, reason } => {
                format!("無法解析數字 '{}': {}", input, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CensusError::IoError(_) => "Check that the file exists and is readable",
            CensusError::CsvError(_) => "The roster CSV needs a 'name,age' header and one person per row",
            CensusError::SerializationError(_) => "Retry without --json",
            CensusError::ConfigParseError { .. } => "Make sure the config file is valid TOML",
            CensusError::InvalidConfigValueError { .. } => "Fix the value named above and run again",
            CensusError::ParseNumeralError { .. } => {
                "Use a decimal number such as 3 or the rendered form Suc(Suc(Suc(Zero)))"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CensusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = CensusError::InvalidConfigValueError {
            field: "roster.minimum_age".to_string(),
            value: "200".to_string(),
            reason: "Value must be between 0 and 150".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Invalid value for 'roster.minimum_age': 200 (Value must be between 0 and 150)"
        );
        assert!(err.user_friendly_message().contains("roster.minimum_age"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: CensusError = io.into();
        assert!(matches!(err, CensusError::IoError(_)));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
