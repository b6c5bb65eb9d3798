use crate::config::roster::{ConfiguredRoster, CsvRoster};
use crate::core::aggregate::ADULT_AGE;
use crate::core::demo::{DemoSettings, MAX_DEMO_MAGNITUDE};
use crate::domain::model::{Person, PersonAggregate};
use crate::utils::error::{CensusError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_AGE: u32 = 150;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    pub numerals: NumeralsConfig,
    pub roster: RosterConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumeralsConfig {
    pub lhs: Option<u64>,
    pub rhs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub minimum_age: Option<u32>,
    pub csv_path: Option<String>,
    pub people: Option<Vec<Person>>,
}

impl CensusConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CensusError::IoError)?;
        tracing::debug!("Read config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CensusError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MIN_AGE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CensusError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(lhs) = self.numerals.lhs {
            validate_range("numerals.lhs", lhs, 0, MAX_DEMO_MAGNITUDE)?;
        }
        if let Some(rhs) = self.numerals.rhs {
            validate_range("numerals.rhs", rhs, 0, MAX_DEMO_MAGNITUDE)?;
        }

        if let Some(minimum_age) = self.roster.minimum_age {
            validate_range("roster.minimum_age", minimum_age, 0, MAX_AGE)?;
        }

        if let Some(csv_path) = &self.roster.csv_path {
            validate_path("roster.csv_path", csv_path)?;
        }

        if let Some(people) = &self.roster.people {
            for (i, person) in people.iter().enumerate() {
                validate_non_empty_string(&format!("roster.people[{}].name", i), &person.name)?;
                validate_range(&format!("roster.people[{}].age", i), person.age, 0, MAX_AGE)?;
            }
        }

        Ok(())
    }

    pub fn settings(&self) -> DemoSettings {
        let defaults = DemoSettings::default();
        DemoSettings {
            lhs: self.numerals.lhs.unwrap_or(defaults.lhs),
            rhs: self.numerals.rhs.unwrap_or(defaults.rhs),
            minimum_age: self.roster.minimum_age.unwrap_or(ADULT_AGE),
        }
    }

    /// CSV 路徑優先，其次是內嵌清單，都沒有就用內建範例
    pub fn roster_source(&self) -> ConfiguredRoster {
        if let Some(csv_path) = &self.roster.csv_path {
            ConfiguredRoster::Csv(CsvRoster::new(csv_path.clone()))
        } else if let Some(people) = &self.roster.people {
            ConfiguredRoster::Inline(PersonAggregate::new(people.clone()))
        } else {
            ConfiguredRoster::Sample
        }
    }
}

impl Validate for CensusConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
