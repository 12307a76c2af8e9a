//! The read-print loop.
//!
//! Generic over the reader and writer so the same loop drives stdin/stdout
//! in the binary and in-memory buffers in tests.

use crate::commands::{Assistant, Reply};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Greeting printed once when a session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Default prompt written before each line is read.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `close` or `exit`.
    Exited,
    /// The input stream ran out.
    EndOfInput,
}

/// Drive `assistant` with lines from `input` until exit or end of input.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the loop with an error;
/// command failures are printed and the loop continues.
pub async fn run_session<R, W>(
    assistant: &mut Assistant,
    prompt: &str,
    input: R,
    output: &mut W,
) -> std::io::Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracing::info!("Session started");
    output.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

    let mut lines = input.lines();
    let end = loop {
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break SessionEnd::EndOfInput;
        };

        match assistant.execute(&line) {
            Reply::Message(message) => {
                output.write_all(format!("{}\n", message).as_bytes()).await?;
            }
            Reply::Exit(message) => {
                output.write_all(format!("{}\n", message).as_bytes()).await?;
                break SessionEnd::Exited;
            }
            Reply::Silent => {}
        }
    };

    output.flush().await?;
    tracing::info!(?end, contacts = assistant.book().len(), "Session finished");
    Ok(end)
}
