use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use skilltree::errors::Result;
use skilltree::generate::{GenerationJob, GenerationOutcome, GeneratorBackend};
use skilltree::session::SessionEvent;
use tokio::sync::mpsc;

/// A fake generator that:
/// - records which topics were requested
/// - immediately reports the next canned outcome for each submitted job.
pub struct FakeGenerator {
    events_tx: mpsc::Sender<SessionEvent>,
    outcomes: Arc<Mutex<VecDeque<GenerationOutcome>>>,
    topics: Arc<Mutex<Vec<String>>>,
}

impl FakeGenerator {
    pub fn new(
        events_tx: mpsc::Sender<SessionEvent>,
        outcomes: Arc<Mutex<VecDeque<GenerationOutcome>>>,
        topics: Arc<Mutex<Vec<String>>>,
    ) -> Self {
        Self {
            events_tx,
            outcomes,
            topics,
        }
    }
}

impl GeneratorBackend for FakeGenerator {
    fn submit(
        &mut self,
        job: GenerationJob,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let tx = self.events_tx.clone();
        let outcomes = Arc::clone(&self.outcomes);
        let topics = Arc::clone(&self.topics);

        Box::pin(async move {
            {
                let mut guard = topics.lock().unwrap();
                guard.push(job.topic.clone());
            }

            let outcome = {
                let mut guard = outcomes.lock().unwrap();
                guard
                    .pop_front()
                    .unwrap_or_else(|| GenerationOutcome::Failed("no canned outcome".to_string()))
            };

            tx.send(SessionEvent::GenerationFinished { outcome })
                .await
                .map_err(anyhow::Error::from)?;
            Ok(())
        })
    }
}
