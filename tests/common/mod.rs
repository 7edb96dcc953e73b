//! Shared test utilities for Vitalis integration tests.
//!
//! Provides a small fixture dataset, mock fallback clients and router
//! builders so each test file only states what it checks.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use vitalis::dataset::Dataset;
use vitalis::fallback::OpenRouterClient;
use vitalis::router::QuestionRouter;
use wiremock::MockServer;

// =============================================================================
// Fixture Dataset
// =============================================================================

/// Model name the mock fallback is configured with.
pub const TEST_MODEL: &str = "test/model";

/// API key sent by the test fallback client.
pub const TEST_API_KEY: &str = "sk-test";

/// WHO-style CSV with a padded header and missing cells.
///
/// - "Niger" precedes "Nigeria" in file order
/// - Chad and Sierra Leone tie on the lowest value; Chad comes first
/// - Japan and Switzerland tie on the highest value; Japan comes first
/// - Two rows lack GDP and one lacks life expectancy
pub const FIXTURE_CSV: &str = "\
Country,Year,Status,Life expectancy ,GDP,Schooling
Niger,2014,Developing,60.0,400.0,5.1
Nigeria,2014,Developing,54.0,3000.0,9.6
Japan,2014,Developed,84.0,38000.0,15.3
Chad,2014,Developing,50.0,900.0,7.2
Switzerland,2014,Developed,84.0,,16.0
Sierra Leone,2014,Developing,50.0,700.0,9.5
Niger,2015,Developing,62.0,,5.4
Nigeria,2015,Developing,,2700.0,10.0
Japan,2015,Developed,83.0,34000.0,15.3
";

/// Countries of [`FIXTURE_CSV`] in file order.
pub const FIXTURE_COUNTRIES: [&str; 6] = [
    "Niger",
    "Nigeria",
    "Japan",
    "Chad",
    "Switzerland",
    "Sierra Leone",
];

pub fn fixture_dataset() -> Arc<Dataset> {
    Arc::new(Dataset::from_reader(FIXTURE_CSV.as_bytes()).unwrap())
}

/// Write the fixture CSV to a temp file (kept alive by the returned handle).
pub fn fixture_csv_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FIXTURE_CSV.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Mean computed independently of the crate's statistics code.
pub fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson coefficient computed independently, over complete pairs only.
pub fn pearson_of(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let cov: f64 = pairs.iter().map(|(x, y)| (x - mx) * (y - my)).sum();
    let vx: f64 = pairs.iter().map(|(x, _)| (x - mx).powi(2)).sum();
    let vy: f64 = pairs.iter().map(|(_, y)| (y - my).powi(2)).sum();
    cov / (vx.sqrt() * vy.sqrt())
}

// =============================================================================
// Mock Fallback
// =============================================================================

/// A successful chat-completions response body.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "gen-test",
        "object": "chat.completion",
        "model": TEST_MODEL,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// The payload the fallback is expected to send for `question`.
pub fn expected_payload(question: &str) -> Value {
    json!({
        "model": TEST_MODEL,
        "messages": [{"role": "user", "content": question}]
    })
}

/// Fallback client pointed at the mock server.
pub fn mock_client(server: &MockServer) -> OpenRouterClient {
    mock_client_with_key(server, Some(TEST_API_KEY))
}

pub fn mock_client_with_key(server: &MockServer, key: Option<&str>) -> OpenRouterClient {
    OpenRouterClient::new(
        server.uri(),
        TEST_MODEL.to_string(),
        key.map(str::to_string),
        "VITALIS_TEST_KEY".to_string(),
        Duration::from_secs(5),
        Arc::new(reqwest::Client::new()),
    )
}

/// Router over the fixture dataset with the fallback pointed at `server`.
pub fn mock_router(server: &MockServer) -> QuestionRouter {
    QuestionRouter::new(fixture_dataset(), Arc::new(mock_client(server)))
}
