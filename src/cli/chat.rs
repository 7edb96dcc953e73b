//! Chat command implementation
//!
//! A line-oriented session: each line is a question, answered through the
//! router and recorded in a conversation log that lives as long as the
//! session. Lines starting with `/` are session commands.

use crate::cli::context::{build_router, load_config, load_dataset};
use crate::cli::{output, ChatArgs};
use crate::conversation::{ConversationLog, Role};
use crate::logging::init_tracing;
use crate::router::QuestionRouter;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "Comandos: /help (ajuda), /history (histórico), /clear (limpar), /quit (sair)";

/// Handle `vitalis chat` command
pub async fn handle_chat(args: &ChatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args.source)?;
    init_tracing(&config.logging.clone().quiet_unless(args.source.log_level.as_deref()))?;

    let dataset = load_dataset(&config)?;
    let router = build_router(&config, dataset)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let exchanges = run_session(&router, stdin, &mut stdout, !args.no_typing).await?;

    tracing::info!(exchanges, "Chat session ended");
    Ok(())
}

/// Drive one session over the given input and output.
///
/// Returns the number of questions answered. The conversation log is
/// dropped when the session ends.
pub async fn run_session<R, W>(
    router: &QuestionRouter,
    input: R,
    out: &mut W,
    typing: bool,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut log = ConversationLog::new();
    let mut lines = input.lines();
    let mut exchanges = 0;

    writeln!(out, "🤖 Chatbot de Expectativa de Vida")?;
    writeln!(out, "{}", HELP)?;

    loop {
        write!(out, "{} ", Role::User.glyph())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let question = line.trim();

        match question {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            "/history" => {
                if log.is_empty() {
                    writeln!(out, "(sem mensagens)")?;
                } else {
                    writeln!(out, "{}", output::format_history_table(&log))?;
                }
                continue;
            }
            "/clear" => {
                log.clear();
                writeln!(out, "Histórico apagado.")?;
                continue;
            }
            _ => {}
        }

        log.push_user(question);

        if typing {
            show_typing(out).await?;
        }
        let answer = router.answer(question).await;
        if typing {
            // Erase the indicator line
            write!(out, "\r\x1b[2K")?;
        }

        writeln!(out, "{} {}", Role::Assistant.glyph(), answer.text)?;
        log.push_assistant(answer.text);
        exchanges += 1;
    }

    log.clear();
    Ok(exchanges)
}

async fn show_typing<W: Write>(out: &mut W) -> std::io::Result<()> {
    for dots in ["", ".", "..", "..."] {
        write!(out, "\r{} Digitando{}", Role::Assistant.glyph(), dots)?;
        out.flush()?;
        tokio::time::sleep(Duration::from_millis(150)).await;
    }
    Ok(())
}
