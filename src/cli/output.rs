//! Output formatting helpers for CLI commands

use crate::conversation::{ConversationLog, Role};
use crate::dataset::{Indicator, Summary};
use crate::router::{Answer, AnswerSource};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Format a number the way the summary table shows it.
fn fmt_stat(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format column summaries as a table
pub fn format_describe_table(summaries: &[(Indicator, Summary)]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max",
    ]);

    for (indicator, s) in summaries {
        table.add_row(vec![
            Cell::new(indicator.label()),
            Cell::new(s.count),
            Cell::new(fmt_stat(s.mean)),
            Cell::new(s.std.map(fmt_stat).unwrap_or_else(|| "-".to_string())),
            Cell::new(fmt_stat(s.min)),
            Cell::new(fmt_stat(s.q25)),
            Cell::new(fmt_stat(s.median)),
            Cell::new(fmt_stat(s.q75)),
            Cell::new(fmt_stat(s.max)),
        ]);
    }

    table.to_string()
}

/// Format column summaries as JSON
pub fn format_describe_json(summaries: &[(Indicator, Summary)]) -> String {
    let columns: Vec<_> = summaries
        .iter()
        .map(|(indicator, summary)| {
            json!({
                "column": indicator.label(),
                "summary": summary,
            })
        })
        .collect();
    to_pretty(&json!({ "columns": columns }))
}

/// Format countries one per line
pub fn format_countries(countries: &[String]) -> String {
    countries.join("\n")
}

/// Format countries as JSON
pub fn format_countries_json(countries: &[String]) -> String {
    to_pretty(&json!({
        "count": countries.len(),
        "countries": countries,
    }))
}

/// Format one country's yearly series as a table under its name
pub fn format_country_series(country: &str, series: &[(i32, Option<f64>)]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Year", "Life expectancy"]);

    for (year, value) in series {
        table.add_row(vec![
            Cell::new(year),
            Cell::new(value.map(fmt_stat).unwrap_or_else(|| "-".to_string())),
        ]);
    }

    format!("{}\n{}", country.bold(), table)
}

/// Format one country's yearly series as JSON; missing values are `null`
pub fn format_country_series_json(country: &str, series: &[(i32, Option<f64>)]) -> String {
    let years: Vec<_> = series
        .iter()
        .map(|(year, value)| json!({ "year": year, "life_expectancy": value }))
        .collect();
    to_pretty(&json!({
        "country": country,
        "years": years,
    }))
}

/// Format an answer for the terminal, with a dim provenance line
pub fn format_answer(answer: &Answer) -> String {
    let origin = match &answer.source {
        AnswerSource::Dataset { rule } => format!("dataset · {}", rule).dimmed(),
        AnswerSource::Fallback { model } => format!("modelo · {}", model).dimmed(),
        AnswerSource::FallbackError { model } => format!("modelo · {}", model).red(),
    };
    format!("{}\n{}", answer.text, origin)
}

/// Format an answer as JSON
pub fn format_answer_json(question: &str, answer: &Answer) -> String {
    to_pretty(&json!({
        "question": question,
        "answer": answer.text,
        "source": answer.source,
    }))
}

/// Format a conversation as a table
pub fn format_history_table(log: &ConversationLog) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "", "Time", "Message"]);

    for (i, turn) in log.turns().iter().enumerate() {
        let content = match turn.role {
            Role::User => turn.content.bold().to_string(),
            Role::Assistant => turn.content.clone(),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&turn.avatar),
            Cell::new(turn.timestamp.format("%H:%M:%S")),
            Cell::new(content),
        ]);
    }

    table.to_string()
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
