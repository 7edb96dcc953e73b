//! Numeric columns of the dataset.

use super::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric column that can be summarised or correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Year,
    LifeExpectancy,
    AdultMortality,
    InfantDeaths,
    Alcohol,
    HepatitisB,
    Measles,
    Bmi,
    UnderFiveDeaths,
    Polio,
    TotalExpenditure,
    Diphtheria,
    HivAids,
    Gdp,
    Population,
    Thinness1To19Years,
    Thinness5To9Years,
    IncomeComposition,
    Schooling,
}

impl Indicator {
    /// Every numeric column, in file order.
    pub const ALL: [Indicator; 19] = [
        Indicator::Year,
        Indicator::LifeExpectancy,
        Indicator::AdultMortality,
        Indicator::InfantDeaths,
        Indicator::Alcohol,
        Indicator::HepatitisB,
        Indicator::Measles,
        Indicator::Bmi,
        Indicator::UnderFiveDeaths,
        Indicator::Polio,
        Indicator::TotalExpenditure,
        Indicator::Diphtheria,
        Indicator::HivAids,
        Indicator::Gdp,
        Indicator::Population,
        Indicator::Thinness1To19Years,
        Indicator::Thinness5To9Years,
        Indicator::IncomeComposition,
        Indicator::Schooling,
    ];

    /// Column header as it appears in the CSV file.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Year => "Year",
            Indicator::LifeExpectancy => "Life expectancy",
            Indicator::AdultMortality => "Adult Mortality",
            Indicator::InfantDeaths => "infant deaths",
            Indicator::Alcohol => "Alcohol",
            Indicator::HepatitisB => "Hepatitis B",
            Indicator::Measles => "Measles",
            Indicator::Bmi => "BMI",
            Indicator::UnderFiveDeaths => "under-five deaths",
            Indicator::Polio => "Polio",
            Indicator::TotalExpenditure => "Total expenditure",
            Indicator::Diphtheria => "Diphtheria",
            Indicator::HivAids => "HIV/AIDS",
            Indicator::Gdp => "GDP",
            Indicator::Population => "Population",
            Indicator::Thinness1To19Years => "thinness 1-19 years",
            Indicator::Thinness5To9Years => "thinness 5-9 years",
            Indicator::IncomeComposition => "Income composition of resources",
            Indicator::Schooling => "Schooling",
        }
    }

    /// Read this column from a record. NaN cells count as missing.
    pub fn value(self, record: &Record) -> Option<f64> {
        let raw = match self {
            Indicator::Year => Some(f64::from(record.year)),
            Indicator::LifeExpectancy => record.life_expectancy,
            Indicator::AdultMortality => record.adult_mortality,
            Indicator::InfantDeaths => record.infant_deaths,
            Indicator::Alcohol => record.alcohol,
            Indicator::HepatitisB => record.hepatitis_b,
            Indicator::Measles => record.measles,
            Indicator::Bmi => record.bmi,
            Indicator::UnderFiveDeaths => record.under_five_deaths,
            Indicator::Polio => record.polio,
            Indicator::TotalExpenditure => record.total_expenditure,
            Indicator::Diphtheria => record.diphtheria,
            Indicator::HivAids => record.hiv_aids,
            Indicator::Gdp => record.gdp,
            Indicator::Population => record.population,
            Indicator::Thinness1To19Years => record.thinness_1_19_years,
            Indicator::Thinness5To9Years => record.thinness_5_9_years,
            Indicator::IncomeComposition => record.income_composition,
            Indicator::Schooling => record.schooling,
        };
        raw.filter(|v| !v.is_nan())
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Indicator {
    type Err = String;

    /// Accepts the CSV header or its snake_case form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Indicator::ALL
            .into_iter()
            .find(|ind| {
                normalize(ind.label()) == wanted
                    || serde_json::to_value(ind)
                        .ok()
                        .and_then(|v| v.as_str().map(normalize))
                        .is_some_and(|name| name == wanted)
            })
            .ok_or_else(|| format!("Unknown indicator: {}", s))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}
