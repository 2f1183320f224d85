//! Line-oriented session loop.
//!
//! Reads commands from any async line source, executes them with an
//! [`Assistant`] and writes one response per command. The binary runs it on
//! stdin/stdout; tests drive it with in-memory buffers.

use crate::commands::Assistant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Greeting written once at the start of a session.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the session until `close`/`exit` or end of input.
///
/// `prompt` is written before each line is read.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub async fn run_session<R, W>(
    assistant: &mut Assistant,
    prompt: &str,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{WELCOME}\n").as_bytes()).await?;
    let mut lines = reader.lines();

    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("Input closed, ending session");
            break;
        };

        let reply = assistant.execute(&line);
        writer.write_all(reply.text().as_bytes()).await?;
        writer.write_all(b"\n").await?;

        if reply.is_exit() {
            info!("Exit requested, ending session");
            break;
        }
    }

    writer.flush().await
}
