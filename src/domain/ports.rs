use crate::domain::model::PersonAggregate;
use crate::utils::error::Result;

/// 任何能產生人員名單的來源（內建範例、TOML 內嵌清單、CSV 檔）
pub trait RosterSource {
    fn load_roster(&self) -> Result<PersonAggregate>;
}

impl RosterSource for PersonAggregate {
    fn load_roster(&self) -> Result<PersonAggregate> {
        Ok(self.clone())
    }
}
