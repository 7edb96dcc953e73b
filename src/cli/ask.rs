//! Ask command implementation

use crate::cli::context::{build_router, load_config, load_dataset};
use crate::cli::output;
use crate::cli::AskArgs;
use crate::logging::init_tracing;

/// Handle `vitalis ask` command
///
/// Logs go to stderr at `warn` unless a level is given, so stdout carries
/// only the answer.
pub async fn handle_ask(args: &AskArgs) -> Result<String, Box<dyn std::error::Error>> {
    if args.question.trim().is_empty() {
        return Err("question must not be empty".into());
    }

    let config = load_config(&args.source)?;
    init_tracing(&config.logging.clone().quiet_unless(args.source.log_level.as_deref()))?;

    let dataset = load_dataset(&config)?;
    let router = build_router(&config, dataset)?;
    let answer = router.answer(&args.question).await;

    Ok(if args.json {
        output::format_answer_json(&args.question, &answer)
    } else {
        output::format_answer(&answer)
    })
}
