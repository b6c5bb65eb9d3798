pub mod roster;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::numeral::parse_magnitude;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::CensusConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "church-census")]
#[command(about = "Unary numeral arithmetic and roster queries demo")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// CSV roster with a `name,age` header, replaces the configured people
    #[arg(long)]
    pub roster_csv: Option<String>,

    /// Left operand, decimal or rendered (e.g. `Suc(Suc(Zero))`)
    #[arg(long)]
    pub lhs: Option<String>,

    /// Right operand, decimal or rendered
    #[arg(long)]
    pub rhs: Option<String>,

    /// Minimum age counted as adult
    #[arg(long)]
    pub min_age: Option<u32>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 `--config` 指定的檔案（若有），再套用命令列覆蓋設定
    pub fn load(&self) -> Result<CensusConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                CensusConfig::from_file(path)?
            }
            None => CensusConfig::default(),
        };
        self.apply_overrides(base)
    }

    pub fn apply_overrides(&self, mut config: CensusConfig) -> Result<CensusConfig> {
        if let Some(lhs) = &self.lhs {
            config.numerals.lhs = Some(parse_magnitude(lhs)?);
        }
        if let Some(rhs) = &self.rhs {
            config.numerals.rhs = Some(parse_magnitude(rhs)?);
        }
        if let Some(min_age) = self.min_age {
            tracing::debug!("Minimum age overridden to: {}", min_age);
            config.roster.minimum_age = Some(min_age);
        }
        if let Some(csv_path) = &self.roster_csv {
            config.roster.csv_path = Some(csv_path.clone());
        }
        Ok(config)
    }
}
