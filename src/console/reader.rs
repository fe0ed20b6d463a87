// src/console/reader.rs

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::session::SessionEvent;

use super::commands::{Command, parse_command};

/// Spawn the console reader task.
///
/// Reads stdin line by line, parses each line into a [`Command`], and
/// forwards it to the session runtime. Blank lines are dropped here so the
/// runtime never sees them. EOF and read errors request a shutdown.
pub fn spawn_reader(events_tx: mpsc::Sender<SessionEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let command = parse_command(&line);
                    if matches!(command, Command::Empty) {
                        continue;
                    }
                    if let Err(err) = events_tx.send(SessionEvent::Command(command)).await {
                        warn!("failed to send SessionEvent::Command: {err}");
                        return;
                    }
                }
                Ok(None) => {
                    debug!("stdin closed, requesting shutdown");
                    let _ = events_tx.send(SessionEvent::ShutdownRequested).await;
                    return;
                }
                Err(err) => {
                    warn!(error = %err, "failed to read console line");
                    let _ = events_tx.send(SessionEvent::ShutdownRequested).await;
                    return;
                }
            }
        }
    })
}
