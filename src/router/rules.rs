//! Keyword rules answered directly from the dataset.

use crate::dataset::{stats, Dataset, Indicator};

/// Computes an answer from the dataset and the lower-cased question.
///
/// Returning `None` means the rule does not apply after all, and evaluation
/// continues with the next rule.
pub type RuleHandler = Box<dyn Fn(&Dataset, &str) -> Option<String> + Send + Sync>;

/// A trigger-phrase predicate paired with an answer generator.
pub struct MatchRule {
    name: String,
    /// Lower-cased; any one of them activates the rule
    triggers: Vec<String>,
    handler: RuleHandler,
}

impl MatchRule {
    pub fn new<F>(name: impl Into<String>, triggers: &[&str], handler: F) -> Self
    where
        F: Fn(&Dataset, &str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Whether any trigger phrase occurs in the (already lower-cased) question.
    pub fn is_triggered(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }

    /// Answer the question if triggered and the handler produces something.
    pub fn apply(&self, dataset: &Dataset, lowered: &str) -> Option<String> {
        if !self.is_triggered(lowered) {
            return None;
        }
        (self.handler)(dataset, lowered)
    }
}

impl std::fmt::Debug for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRule")
            .field("name", &self.name)
            .field("triggers", &self.triggers)
            .finish_non_exhaustive()
    }
}

pub const GLOBAL_MEAN: &str = "global_mean";
pub const COUNTRY_MEAN: &str = "country_mean";
pub const HIGHEST: &str = "highest_life_expectancy";
pub const LOWEST: &str = "lowest_life_expectancy";
pub const GDP_CORRELATION: &str = "gdp_correlation";

/// The built-in rules, highest priority first.
pub fn default_rules() -> Vec<MatchRule> {
    vec![
        MatchRule::new(GLOBAL_MEAN, &["expectativa de vida média"], global_mean),
        MatchRule::new(
            COUNTRY_MEAN,
            &["expectativa de vida no", "expectativa de vida em"],
            country_mean,
        ),
        MatchRule::new(HIGHEST, &["país com maior expectativa de vida"], highest),
        MatchRule::new(LOWEST, &["país com menor expectativa de vida"], lowest),
        MatchRule::new(
            GDP_CORRELATION,
            &["relação entre pib e expectativa de vida"],
            gdp_correlation,
        ),
    ]
}

fn global_mean(dataset: &Dataset, _lowered: &str) -> Option<String> {
    let mean = stats::mean(dataset.column(Indicator::LifeExpectancy))?;
    Some(format!(
        "A expectativa de vida média global no dataset é **{:.2} anos**.",
        mean
    ))
}

/// First country, in dataset order, whose name occurs in the question.
///
/// Overlapping names ("Niger" / "Nigeria") resolve to whichever appears
/// first in the file, not to the longest match.
pub fn find_country<'a>(dataset: &'a Dataset, lowered: &str) -> Option<&'a str> {
    dataset
        .countries()
        .iter()
        .find(|country| lowered.contains(country.to_lowercase().as_str()))
        .map(String::as_str)
}

fn country_mean(dataset: &Dataset, lowered: &str) -> Option<String> {
    let country = find_country(dataset, lowered)?;
    let mean = stats::mean(
        dataset
            .records_for(country)
            .map(|r| Indicator::LifeExpectancy.value(r)),
    );

    Some(match mean {
        Some(mean) => format!(
            "A expectativa de vida média em **{}** é **{:.2} anos**.",
            country, mean
        ),
        None => format!(
            "Não há registros de expectativa de vida para **{}** no dataset.",
            country
        ),
    })
}

fn highest(dataset: &Dataset, _lowered: &str) -> Option<String> {
    let (row, max) = stats::arg_max(dataset.column(Indicator::LifeExpectancy))?;
    let country = &dataset.records()[row].country;
    Some(format!(
        "O país com **maior expectativa de vida** é **{}**, com **{:.2} anos**.",
        country, max
    ))
}

fn lowest(dataset: &Dataset, _lowered: &str) -> Option<String> {
    let (row, min) = stats::arg_min(dataset.column(Indicator::LifeExpectancy))?;
    let country = &dataset.records()[row].country;
    Some(format!(
        "O país com **menor expectativa de vida** é **{}**, com **{:.2} anos**.",
        country, min
    ))
}

fn gdp_correlation(dataset: &Dataset, _lowered: &str) -> Option<String> {
    let r = stats::pearson(dataset.column_pairs(Indicator::Gdp, Indicator::LifeExpectancy))?;
    let direction = if r > 0.0 { "positiva" } else { "negativa" };
    Some(format!(
        "A correlação entre **PIB** e **expectativa de vida** no dataset é **{:.2}**, indicando uma relação {}.",
        r, direction
    ))
}
