use crate::core::aggregate::ADULT_AGE;
use crate::domain::model::{Numeral, Person, PersonAggregate};
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use serde::Serialize;

/// 運算元上限；乘積的字串長度與兩者相乘成正比
pub const MAX_DEMO_MAGNITUDE: u64 = 1000;

pub const NO_NAME_PLACEHOLDER: &str = "(ninguno)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub lhs: u64,
    pub rhs: u64,
    pub minimum_age: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            lhs: 2,
            rhs: 3,
            minimum_age: ADULT_AGE,
        }
    }
}

/// 內建範例名單
pub fn sample_roster() -> PersonAggregate {
    PersonAggregate::new(vec![
        Person::new("Ana", 20),
        Person::new("Luis", 17),
        Person::new("Ana", 22),
        Person::new("Pedro", 30),
        Person::new("Luis", 25),
    ])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumeralReport {
    pub lhs: u64,
    pub rhs: u64,
    pub sum: String,
    pub sum_magnitude: u64,
    pub product: String,
    pub product_magnitude: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterReport {
    pub count: usize,
    pub minimum_age: u32,
    pub adults: Vec<String>,
    pub most_common_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub numerals: NumeralReport,
    pub roster: RosterReport,
}

impl DemoReport {
    /// 文字輸出，每個結果一行
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Suma: {}", self.numerals.sum),
            format!("Multiplicación: {}", self.numerals.product),
            format!("Cantidad de personas: {}", self.roster.count),
            format!("Mayores de edad: {:?}", self.roster.adults),
            format!(
                "Nombre más común: {}",
                self.roster
                    .most_common_name
                    .as_deref()
                    .unwrap_or(NO_NAME_PLACEHOLDER)
            ),
        ]
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct CensusEngine<R: RosterSource> {
    settings: DemoSettings,
    source: R,
}

impl<R: RosterSource> CensusEngine<R> {
    pub fn new(settings: DemoSettings, source: R) -> Self {
        Self { settings, source }
    }

    pub fn run(&self) -> Result<DemoReport> {
        tracing::debug!(
            "Numeral demo: lhs={} rhs={}",
            self.settings.lhs,
            self.settings.rhs
        );
        let numerals = self.numeral_report();

        let roster = self.source.load_roster()?;
        tracing::debug!("Loaded roster with {} people", roster.count());
        let roster = self.roster_report(&roster);

        tracing::info!(
            "Demo finished: sum={} product={} people={}",
            numerals.sum_magnitude,
            numerals.product_magnitude,
            roster.count
        );

        Ok(DemoReport { numerals, roster })
    }

    fn numeral_report(&self) -> NumeralReport {
        let lhs = Numeral::from_magnitude(self.settings.lhs);
        let rhs = Numeral::from_magnitude(self.settings.rhs);

        let sum = lhs.add(&rhs);
        let product = lhs.multiply(&rhs);

        NumeralReport {
            lhs: self.settings.lhs,
            rhs: self.settings.rhs,
            sum: sum.render(),
            sum_magnitude: sum.magnitude(),
            product: product.render(),
            product_magnitude: product.magnitude(),
        }
    }

    fn roster_report(&self, roster: &PersonAggregate) -> RosterReport {
        let most_common_name = roster.most_common_name().map(str::to_string);
        if most_common_name.is_none() {
            tracing::warn!("Roster is empty, no most common name");
        }

        RosterReport {
            count: roster.count(),
            minimum_age: self.settings.minimum_age,
            adults: roster
                .adult_names(self.settings.minimum_age)
                .into_iter()
                .map(str::to_string)
                .collect(),
            most_common_name,
        }
    }
}
