//! A single row of the life-expectancy dataset.

use serde::{Deserialize, Serialize};

/// Development classification of a country in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevelopmentStatus {
    Developed,
    Developing,
}

/// One (country, year) observation.
///
/// Header names follow the public WHO/Kaggle file. Headers are trimmed before
/// matching, and the aliases cover the spellings seen in circulating copies
/// (`thinness  1-19 years` carries a double space upstream). Every indicator
/// is optional: empty or unparseable cells become `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(
        rename = "Status",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub status: Option<DevelopmentStatus>,
    #[serde(
        rename = "Life expectancy",
        alias = "Life Expectancy",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub life_expectancy: Option<f64>,
    #[serde(
        rename = "Adult Mortality",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub adult_mortality: Option<f64>,
    #[serde(
        rename = "infant deaths",
        alias = "Infant deaths",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub infant_deaths: Option<f64>,
    #[serde(rename = "Alcohol", default, deserialize_with = "csv::invalid_option")]
    pub alcohol: Option<f64>,
    #[serde(
        rename = "Hepatitis B",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub hepatitis_b: Option<f64>,
    #[serde(rename = "Measles", default, deserialize_with = "csv::invalid_option")]
    pub measles: Option<f64>,
    #[serde(rename = "BMI", default, deserialize_with = "csv::invalid_option")]
    pub bmi: Option<f64>,
    #[serde(
        rename = "under-five deaths",
        alias = "Under-five deaths",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub under_five_deaths: Option<f64>,
    #[serde(rename = "Polio", default, deserialize_with = "csv::invalid_option")]
    pub polio: Option<f64>,
    #[serde(
        rename = "Total expenditure",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub total_expenditure: Option<f64>,
    #[serde(
        rename = "Diphtheria",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub diphtheria: Option<f64>,
    #[serde(rename = "HIV/AIDS", default, deserialize_with = "csv::invalid_option")]
    pub hiv_aids: Option<f64>,
    #[serde(rename = "GDP", default, deserialize_with = "csv::invalid_option")]
    pub gdp: Option<f64>,
    #[serde(
        rename = "Population",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub population: Option<f64>,
    #[serde(
        rename = "thinness 1-19 years",
        alias = "thinness  1-19 years",
        alias = "Thinness 1-19 years",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub thinness_1_19_years: Option<f64>,
    #[serde(
        rename = "thinness 5-9 years",
        alias = "Thinness 5-9 years",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub thinness_5_9_years: Option<f64>,
    #[serde(
        rename = "Income composition of resources",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub income_composition: Option<f64>,
    #[serde(
        rename = "Schooling",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub schooling: Option<f64>,
}

impl Record {
    /// Create a record with only the identifying columns and life expectancy set.
    pub fn new(country: impl Into<String>, year: i32, life_expectancy: Option<f64>) -> Self {
        Self {
            country: country.into(),
            year,
            status: None,
            life_expectancy,
            adult_mortality: None,
            infant_deaths: None,
            alcohol: None,
            hepatitis_b: None,
            measles: None,
            bmi: None,
            under_five_deaths: None,
            polio: None,
            total_expenditure: None,
            diphtheria: None,
            hiv_aids: None,
            gdp: None,
            population: None,
            thinness_1_19_years: None,
            thinness_5_9_years: None,
            income_composition: None,
            schooling: None,
        }
    }

    pub fn with_status(mut self, status: DevelopmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_gdp(mut self, gdp: Option<f64>) -> Self {
        self.gdp = gdp;
        self
    }
}
