//! Dataset command implementations

use crate::cli::context::{load_config, load_dataset};
use crate::cli::{output, CountriesArgs, CountryArgs, DescribeArgs};
use crate::dataset::Indicator;
use crate::logging::init_tracing;

/// Handle `vitalis dataset describe` command
///
/// With no `--indicator`, every numeric column is summarized.
pub fn handle_describe(args: &DescribeArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(&args.source)?;
    init_tracing(&config.logging.clone().quiet_unless(args.source.log_level.as_deref()))?;

    let dataset = load_dataset(&config)?;
    let indicators: &[Indicator] = if args.indicators.is_empty() {
        &Indicator::ALL
    } else {
        &args.indicators
    };
    let summaries = dataset.describe(indicators);

    Ok(if args.json {
        output::format_describe_json(&summaries)
    } else {
        output::format_describe_table(&summaries)
    })
}

/// Handle `vitalis dataset countries` command
pub fn handle_countries(args: &CountriesArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(&args.source)?;
    init_tracing(&config.logging.clone().quiet_unless(args.source.log_level.as_deref()))?;

    let dataset = load_dataset(&config)?;

    Ok(if args.json {
        output::format_countries_json(dataset.countries())
    } else {
        output::format_countries(dataset.countries())
    })
}

/// Handle `vitalis dataset country` command
pub fn handle_country(args: &CountryArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(&args.source)?;
    init_tracing(&config.logging.clone().quiet_unless(args.source.log_level.as_deref()))?;

    let dataset = load_dataset(&config)?;
    let (country, series) = dataset
        .yearly_life_expectancy(&args.name)
        .ok_or_else(|| format!("Country not found: {}", args.name))?;

    Ok(if args.json {
        output::format_country_series_json(country, &series)
    } else {
        output::format_country_series(country, &series)
    })
}
