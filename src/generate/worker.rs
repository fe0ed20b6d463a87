// src/generate/worker.rs

//! Generation worker loop and the backend seam the runtime talks through.
//!
//! The session runtime talks to a `GeneratorBackend` instead of a raw mpsc
//! sender. This makes it easy to swap in a fake generator in tests while
//! keeping the HTTP implementation in [`client`](super::client).

use std::future::Future;
use std::pin::Pin;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::errors::{Error, Result};
use crate::session::SessionEvent;

use super::GenerationOutcome;
use super::client::GeminiClient;

/// A queued generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    pub topic: String,
}

/// Trait abstracting how generation jobs are dispatched.
///
/// Production code uses [`HttpGeneratorBackend`]; tests can provide their
/// own implementation that emits canned outcomes without touching the
/// network.
pub trait GeneratorBackend: Send {
    /// Dispatch the given job.
    ///
    /// Completion is reported asynchronously through the session event
    /// channel as `SessionEvent::GenerationFinished`.
    fn submit(&mut self, job: GenerationJob)
    -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Real generator backend used in production.
///
/// Wraps the background worker loop spawned by [`spawn_generator`]; `submit`
/// just forwards the job over an mpsc channel.
pub struct HttpGeneratorBackend {
    tx: mpsc::Sender<GenerationJob>,
}

impl HttpGeneratorBackend {
    /// Create a new backend wired to the given session event sender.
    ///
    /// This spawns the background worker loop immediately.
    pub fn new(events_tx: mpsc::Sender<SessionEvent>, client: GeminiClient) -> Self {
        let tx = spawn_generator(events_tx, client);
        Self { tx }
    }
}

impl GeneratorBackend for HttpGeneratorBackend {
    fn submit(
        &mut self,
        job: GenerationJob,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        // Clone the sender so the future doesn't borrow `self` across `await`.
        let tx = self.tx.clone();

        Box::pin(async move {
            tx.send(job).await.map_err(Error::from)?;
            Ok(())
        })
    }
}

/// Spawn the background generation loop.
///
/// Jobs run one at a time in arrival order. The session's single-flight
/// guard means there is never more than one job waiting in practice.
pub fn spawn_generator(
    events_tx: mpsc::Sender<SessionEvent>,
    client: GeminiClient,
) -> mpsc::Sender<GenerationJob> {
    let (tx, mut rx) = mpsc::channel::<GenerationJob>(8);

    tokio::spawn(async move {
        info!("generation worker started");

        while let Some(job) = rx.recv().await {
            debug!(topic = %job.topic, "generation job started");

            let outcome = match client.generate(&job.topic).await {
                Ok(courses) => GenerationOutcome::Generated(courses),
                Err(err) => {
                    warn!(error = %err, "generation request failed");
                    GenerationOutcome::Failed(err.to_string())
                }
            };

            if events_tx
                .send(SessionEvent::GenerationFinished { outcome })
                .await
                .is_err()
            {
                break;
            }
        }

        info!("generation worker finished (channel closed)");
    });

    tx
}
