use crate::core::demo::sample_roster;
use crate::domain::model::{Person, PersonAggregate};
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::path::{Path, PathBuf};

/// `name,age` 格式的 CSV 名單檔
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRoster {
    path: PathBuf,
}

impl CsvRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<PersonAggregate> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut roster = PersonAggregate::default();
        for (row, record) in csv_reader.deserialize::<Person>().enumerate() {
            let person = record?;
            validate_non_empty_string(&format!("roster row {}", row + 1), &person.name)?;
            roster.push(person);
        }
        Ok(roster)
    }
}

impl RosterSource for CsvRoster {
    fn load_roster(&self) -> Result<PersonAggregate> {
        tracing::debug!("Reading roster CSV {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        let roster = Self::from_reader(file)?;
        tracing::debug!("Roster CSV yielded {} people", roster.count());
        Ok(roster)
    }
}

/// 由配置決定的名單來源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfiguredRoster {
    Sample,
    Inline(PersonAggregate),
    Csv(CsvRoster),
}

impl RosterSource for ConfiguredRoster {
    fn load_roster(&self) -> Result<PersonAggregate> {
        match self {
            ConfiguredRoster::Sample => Ok(sample_roster()),
            ConfiguredRoster::Inline(roster) => roster.load_roster(),
            ConfiguredRoster::Csv(csv) => csv.load_roster(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CensusError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_people_in_file_order() {
        let data = "name,age\nAna,20\nLuis, 17\nAna,22\n";
        let roster = CsvRoster::from_reader(data.as_bytes()).unwrap();

        assert_eq!(roster.count(), 3);
        assert_eq!(roster.people()[1], Person::new("Luis", 17));
        assert_eq!(roster.most_common_name(), Some("Ana"));
    }

    #[test]
    fn test_header_only_is_empty_roster() {
        let roster = CsvRoster::from_reader("name,age\n".as_bytes()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_bad_age_is_csv_error() {
        let result = CsvRoster::from_reader("name,age\nAna,veinte\n".as_bytes());
        assert!(matches!(result, Err(CensusError::CsvError(_))));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = CsvRoster::from_reader("name,age\n,20\n".as_bytes());
        assert!(matches!(
            result,
            Err(CensusError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "name,age\nPedro,30\nLuis,25\nLuis,17\n").unwrap();

        let source = CsvRoster::new(file.path());
        assert_eq!(source.path(), file.path());
        let roster = source.load_roster().unwrap();
        assert_eq!(roster.count(), 3);
        assert_eq!(roster.most_common_name(), Some("Luis"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvRoster::new("/nonexistent/roster.csv");
        assert!(matches!(source.load_roster(), Err(CensusError::IoError(_))));
    }

    #[test]
    fn test_configured_sources() {
        assert_eq!(ConfiguredRoster::Sample.load_roster().unwrap().count(), 5);

        let inline = PersonAggregate::new(vec![Person::new("Ana", 20)]);
        let roster = ConfiguredRoster::Inline(inline.clone()).load_roster().unwrap();
        assert_eq!(roster, inline);
    }
}
