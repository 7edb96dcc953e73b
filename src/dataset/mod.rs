//! Reference dataset of life-expectancy indicators.
//!
//! The dataset is loaded once and is read-only afterwards. Row order is the
//! original file order and is part of the contract: "first" always means
//! first in file order, both for the distinct-country listing and for
//! max/min tie-breaking.
//!
//! # Example
//!
//! ```rust
//! use vitalis::dataset::{Dataset, Indicator, Record};
//!
//! let dataset = Dataset::from_records(vec![
//!     Record::new("Niger", 2014, Some(61.1)),
//!     Record::new("Nigeria", 2014, Some(54.5)),
//!     Record::new("Niger", 2015, Some(61.8)),
//! ])
//! .unwrap();
//!
//! assert_eq!(dataset.countries(), ["Niger", "Nigeria"]);
//! assert_eq!(dataset.column(Indicator::LifeExpectancy).count(), 3);
//! ```

pub mod error;
pub mod indicator;
pub mod record;
pub mod stats;

pub use error::DatasetError;
pub use indicator::Indicator;
pub use record::{DevelopmentStatus, Record};
pub use stats::Summary;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Immutable in-memory table of records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    /// Distinct country names in order of first appearance.
    countries: Vec<String>,
}

impl Dataset {
    /// Load a CSV file from disk.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            countries = dataset.countries.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV content from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = rdr
            .deserialize::<Record>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Build a dataset from already-parsed records, preserving their order.
    pub fn from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let countries = {
            let mut seen = HashSet::new();
            records
                .iter()
                .filter(|r| !r.country.trim().is_empty())
                .filter(|r| seen.insert(r.country.as_str()))
                .map(|r| r.country.clone())
                .collect()
        };

        Ok(Self { records, countries })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct country names in order of first appearance.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Records of one country (exact name match), in file order.
    pub fn records_for<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.country == country)
    }

    /// Yearly life expectancy of one country, sorted by year.
    ///
    /// The name is matched case-insensitively against the distinct country
    /// list; the canonical spelling is returned with the series.
    pub fn yearly_life_expectancy(&self, country: &str) -> Option<(&str, Vec<(i32, Option<f64>)>)> {
        let wanted = country.trim().to_lowercase();
        let name = self
            .countries
            .iter()
            .find(|c| c.to_lowercase() == wanted)?
            .as_str();

        let mut series: Vec<(i32, Option<f64>)> = self
            .records_for(name)
            .map(|r| (r.year, r.life_expectancy))
            .collect();
        series.sort_by_key(|&(year, _)| year);
        Some((name, series))
    }

    /// Values of one column in file order; missing cells are `None`.
    pub fn column(&self, indicator: Indicator) -> impl Iterator<Item = Option<f64>> + '_ {
        self.records.iter().map(move |r| indicator.value(r))
    }

    /// Row-aligned pairs of two columns, for correlation.
    pub fn column_pairs(
        &self,
        x: Indicator,
        y: Indicator,
    ) -> impl Iterator<Item = (Option<f64>, Option<f64>)> + '_ {
        self.records.iter().map(move |r| (x.value(r), y.value(r)))
    }

    /// `describe()`-style summary for the requested columns.
    ///
    /// Columns with no present values are omitted.
    pub fn describe(&self, indicators: &[Indicator]) -> Vec<(Indicator, Summary)> {
        indicators
            .iter()
            .filter_map(|&ind| stats::describe(self.column(ind)).map(|s| (ind, s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Country,Year,Status,Life expectancy ,Adult Mortality, BMI ,GDP,thinness  1-19 years
Brazil,2015,Developing,75.0,142,58.3,8757.2,2.6
Brazil,2014,Developing,74.8,145,57.8,,2.6
Japan,2015,Developed,83.7,55,29.0,34474.1,2.1
Chad,2015,Developing,,340,,777.2,
";

    #[test]
    fn test_from_reader_trims_padded_headers() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 4);

        let first = &dataset.records()[0];
        assert_eq!(first.country, "Brazil");
        assert_eq!(first.year, 2015);
        assert_eq!(first.status, Some(DevelopmentStatus::Developing));
        assert_eq!(first.life_expectancy, Some(75.0));
        assert_eq!(first.bmi, Some(58.3));
        assert_eq!(first.thinness_1_19_years, Some(2.6));
    }

    #[test]
    fn test_empty_cells_are_missing() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.records()[1].gdp, None);
        assert_eq!(dataset.records()[3].life_expectancy, None);
        assert_eq!(dataset.records()[3].bmi, None);
    }

    #[test]
    fn test_columns_absent_from_file_are_missing() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(dataset.column(Indicator::Schooling).all(|v| v.is_none()));
    }

    #[test]
    fn test_countries_in_first_appearance_order() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.countries(), ["Brazil", "Japan", "Chad"]);
    }

    #[test]
    fn test_records_for_country() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let years: Vec<i32> = dataset.records_for("Brazil").map(|r| r.year).collect();
        assert_eq!(years, vec![2015, 2014]);
        assert_eq!(dataset.records_for("Peru").count(), 0);
    }

    #[test]
    fn test_blank_country_cells_not_listed() {
        let csv = "Country,Year,Life expectancy\n,2014,40.0\n  ,2015,41.0\nJapan,2014,84.0\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.countries(), ["Japan"]);
    }

    #[test]
    fn test_yearly_life_expectancy_sorted_by_year() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let (name, series) = dataset.yearly_life_expectancy("brazil").unwrap();
        assert_eq!(name, "Brazil");
        assert_eq!(series, vec![(2014, Some(74.8)), (2015, Some(75.0))]);

        let (_, chad) = dataset.yearly_life_expectancy(" CHAD ").unwrap();
        assert_eq!(chad, vec![(2015, None)]);

        assert!(dataset.yearly_life_expectancy("Peru").is_none());
        assert!(dataset.yearly_life_expectancy("").is_none());
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let result = Dataset::from_reader("Country,Year,Life expectancy\n".as_bytes());
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_malformed_year_is_csv_error() {
        let csv = "Country,Year\nBrazil,2015\nJapan,soon\n";
        let result = Dataset::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(DatasetError::Csv { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dataset::load(Path::new("/nonexistent/LifeExpectancy.csv"));
        assert!(matches!(result, Err(DatasetError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), SAMPLE).unwrap();

        let dataset = Dataset::load(temp.path()).unwrap();
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_describe_skips_empty_columns() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let summaries = dataset.describe(&[Indicator::LifeExpectancy, Indicator::Schooling]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].0, Indicator::LifeExpectancy);
        assert_eq!(summaries[0].1.count, 3);
    }
}
