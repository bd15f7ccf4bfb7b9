pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod shutdown;
pub mod state;

pub use input::{InputEvent, InteractionState};
pub use renderer::{Frame, JsonLinesRenderer, Renderer, TraceRenderer};
pub use scheduler::{RunSummary, Scheduler, StopReason};
pub use shutdown::ShutdownManager;
pub use state::App;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;

/// Forwards stdin commands to the scheduler until EOF or the receiver drops.
pub fn spawn_stdin_controller(tx: UnboundedSender<InputEvent>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match line.parse::<InputEvent>() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!(input = %line, "Ignoring command: {e}"),
                },
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Reading stdin failed: {e}");
                    break;
                }
            }
        }
    });
}
