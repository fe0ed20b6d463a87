// tests/session_flow.rs

use skilltree_test_utils::builders::{CatalogBuilder, CourseBuilder};
use skilltree_test_utils::fake_generator::FakeGenerator;
use skilltree_test_utils::{init_tracing, with_timeout};

use std::collections::VecDeque;
use std::error::Error;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use skilltree::catalog::{Catalog, Course, default_courses};
use skilltree::console::{Command, LoadSource};
use skilltree::errors::Result;
use skilltree::generate::{GenerationJob, GenerationOutcome, GeneratorBackend};
use skilltree::layout::LayoutSettings;
use skilltree::scene::FilterMode;
use skilltree::session::{Session, SessionEvent, SessionRuntime};

type TestResult = std::result::Result<(), Box<dyn Error>>;

fn default_session() -> Session {
    Session::new(
        Catalog::from_courses(default_courses()),
        FilterMode::All,
        LayoutSettings::default(),
    )
}

fn generated_courses() -> Vec<Course> {
    vec![
        CourseBuilder::new("GEN100").title("Generated Intro").build(),
        CourseBuilder::new("GEN200")
            .title("Generated Advanced")
            .requires("GEN100")
            .build(),
    ]
}

/// Channel plus fake generator wired the way `run` wires the real one.
fn fake_rig(
    outcomes: Vec<GenerationOutcome>,
) -> (
    mpsc::Sender<SessionEvent>,
    mpsc::Receiver<SessionEvent>,
    FakeGenerator,
    Arc<Mutex<Vec<String>>>,
) {
    let (tx, rx) = mpsc::channel(16);
    let outcomes = Arc::new(Mutex::new(VecDeque::from(outcomes)));
    let topics = Arc::new(Mutex::new(Vec::new()));
    let generator = FakeGenerator::new(tx.clone(), outcomes, Arc::clone(&topics));
    (tx, rx, generator, topics)
}

/// Pre-seed a command sequence ending in `quit` and run the session to
/// completion.
async fn run_commands(
    session: Session,
    commands: Vec<Command>,
) -> std::result::Result<Session, Box<dyn Error>> {
    let (tx, rx, generator, _topics) = fake_rig(Vec::new());

    for command in commands {
        tx.send(SessionEvent::Command(command)).await?;
    }
    tx.send(SessionEvent::Command(Command::Quit)).await?;

    let runtime = SessionRuntime::new(session, rx, generator);
    Ok(with_timeout(runtime.run()).await?)
}

#[tokio::test]
async fn toggle_marks_and_unmarks() -> TestResult {
    init_tracing();

    let session = run_commands(
        default_session(),
        vec![
            Command::Toggle("ADV100".to_string()),
            Command::Toggle("MAG100".to_string()),
            Command::Toggle("MAG100".to_string()),
        ],
    )
    .await?;

    assert_eq!(session.completed_count(), 1);
    assert!(session.completed().contains("ADV100"));
    Ok(())
}

#[tokio::test]
async fn toggling_an_unknown_id_still_counts() -> TestResult {
    init_tracing();

    let session = run_commands(
        default_session(),
        vec![Command::Toggle("NOPE".to_string())],
    )
    .await?;

    assert!(session.completed().contains("NOPE"));
    Ok(())
}

#[tokio::test]
async fn reset_clears_only_after_confirmation() -> TestResult {
    init_tracing();

    let session = run_commands(
        default_session(),
        vec![
            Command::Toggle("ADV100".to_string()),
            Command::Toggle("MAG100".to_string()),
            Command::Reset,
            Command::Confirm,
        ],
    )
    .await?;

    assert_eq!(session.completed_count(), 0);
    Ok(())
}

#[tokio::test]
async fn any_other_command_cancels_a_pending_reset() -> TestResult {
    init_tracing();

    // `map` lands while the confirmation is pending; it cancels the reset
    // and is swallowed.
    let session = run_commands(
        default_session(),
        vec![
            Command::Toggle("ADV100".to_string()),
            Command::Reset,
            Command::Map,
        ],
    )
    .await?;

    assert_eq!(session.completed_count(), 1);
    Ok(())
}

#[tokio::test]
async fn reset_with_no_progress_needs_no_confirmation() -> TestResult {
    init_tracing();

    // No prompt opens, so the follow-up toggle is processed normally.
    let session = run_commands(
        default_session(),
        vec![Command::Reset, Command::Toggle("ADV100".to_string())],
    )
    .await?;

    assert_eq!(session.completed_count(), 1);
    Ok(())
}

#[tokio::test]
async fn quit_during_reset_prompt_still_quits() -> TestResult {
    init_tracing();

    let (tx, rx, generator, _topics) = fake_rig(Vec::new());
    tx.send(SessionEvent::Command(Command::Toggle("ADV100".to_string())))
        .await?;
    tx.send(SessionEvent::Command(Command::Reset)).await?;
    tx.send(SessionEvent::Command(Command::Quit)).await?;

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let session = with_timeout(runtime.run()).await?;

    // Quit does not count as confirmation.
    assert_eq!(session.completed_count(), 1);
    Ok(())
}

#[tokio::test]
async fn shutdown_request_stops_the_loop() -> TestResult {
    init_tracing();

    let (tx, rx, generator, _topics) = fake_rig(Vec::new());
    tx.send(SessionEvent::Command(Command::Toggle("ADV100".to_string())))
        .await?;
    tx.send(SessionEvent::ShutdownRequested).await?;

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let session = with_timeout(runtime.run()).await?;

    assert_eq!(session.completed_count(), 1);
    Ok(())
}

#[tokio::test]
async fn closing_the_event_channel_ends_the_run() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::channel(16);
    let outcomes = Arc::new(Mutex::new(VecDeque::new()));
    let topics = Arc::new(Mutex::new(Vec::new()));
    // The generator holds no sender clone here, so dropping `tx` closes the
    // channel outright.
    let (inert_tx, _inert_rx) = mpsc::channel(1);
    let generator = FakeGenerator::new(inert_tx, outcomes, topics);
    drop(tx);

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let session = with_timeout(runtime.run()).await?;

    assert_eq!(session.completed_count(), 0);
    Ok(())
}

#[tokio::test]
async fn filter_and_search_commands_update_the_session() -> TestResult {
    init_tracing();

    let session = run_commands(
        default_session(),
        vec![
            Command::Filter(FilterMode::Next),
            Command::Search("spellblade".to_string()),
        ],
    )
    .await?;

    assert_eq!(session.filter(), FilterMode::Next);
    assert_eq!(session.search_query(), "spellblade");
    Ok(())
}

#[tokio::test]
async fn loading_the_example_replaces_catalog_and_resets_progress() -> TestResult {
    init_tracing();

    let session = Session::new(
        CatalogBuilder::new().with_chain("OLD1", &[]).build(),
        FilterMode::All,
        LayoutSettings::default(),
    );

    let session = run_commands(
        session,
        vec![
            Command::Toggle("OLD1".to_string()),
            Command::Load(LoadSource::Example),
        ],
    )
    .await?;

    assert_eq!(session.catalog().len(), 7);
    assert!(session.catalog().contains("ULT300"));
    assert_eq!(session.completed_count(), 0);
    Ok(())
}

#[tokio::test]
async fn failed_load_keeps_the_current_catalog() -> TestResult {
    init_tracing();

    let session = run_commands(
        default_session(),
        vec![
            Command::Toggle("ADV100".to_string()),
            Command::Load(LoadSource::Path("/definitely/not/here.csv".to_string())),
        ],
    )
    .await?;

    assert_eq!(session.catalog().len(), 7);
    assert!(session.completed().contains("ADV100"));
    Ok(())
}

#[tokio::test]
async fn generation_success_installs_catalog_and_resets_progress() -> TestResult {
    init_tracing();

    let (tx, rx, generator, topics) =
        fake_rig(vec![GenerationOutcome::Generated(generated_courses())]);

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let handle = tokio::spawn(runtime.run());

    tx.send(SessionEvent::Command(Command::Toggle("ADV100".to_string())))
        .await?;
    tx.send(SessionEvent::Command(Command::Generate("rust".to_string())))
        .await?;

    // Give the loop time to process the finished generation before quitting.
    sleep(Duration::from_millis(100)).await;
    tx.send(SessionEvent::Command(Command::Quit)).await?;

    let session = handle.await??;

    assert_eq!(session.catalog().len(), 2);
    assert!(session.catalog().contains("GEN200"));
    assert_eq!(session.completed_count(), 0);
    assert!(!session.is_generating());
    assert_eq!(*topics.lock().unwrap(), vec!["rust".to_string()]);
    Ok(())
}

/// A generator that records jobs but never reports completion, so tests can
/// sequence `GenerationFinished` events themselves.
struct SilentGenerator {
    submitted: Arc<Mutex<Vec<String>>>,
}

impl SilentGenerator {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let submitted = Arc::new(Mutex::new(Vec::new()));
        let generator = Self {
            submitted: Arc::clone(&submitted),
        };
        (generator, submitted)
    }
}

impl GeneratorBackend for SilentGenerator {
    fn submit(
        &mut self,
        job: GenerationJob,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let submitted = Arc::clone(&self.submitted);
        Box::pin(async move {
            submitted.lock().unwrap().push(job.topic);
            Ok(())
        })
    }
}

#[tokio::test]
async fn failed_generation_leaves_everything_untouched() -> TestResult {
    init_tracing();

    let (generator, _submitted) = SilentGenerator::new();
    let (tx, rx) = mpsc::channel(16);

    tx.send(SessionEvent::Command(Command::Toggle("ADV100".to_string())))
        .await?;
    tx.send(SessionEvent::Command(Command::Generate("rust".to_string())))
        .await?;
    tx.send(SessionEvent::GenerationFinished {
        outcome: GenerationOutcome::Failed("boom".to_string()),
    })
    .await?;
    tx.send(SessionEvent::Command(Command::Quit)).await?;

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let session = with_timeout(runtime.run()).await?;

    assert_eq!(session.catalog().len(), 7);
    assert!(session.completed().contains("ADV100"));
    assert!(!session.is_generating());
    Ok(())
}

#[tokio::test]
async fn empty_generation_result_keeps_the_catalog() -> TestResult {
    init_tracing();

    let (generator, _submitted) = SilentGenerator::new();
    let (tx, rx) = mpsc::channel(16);

    tx.send(SessionEvent::Command(Command::Toggle("ADV100".to_string())))
        .await?;
    tx.send(SessionEvent::Command(Command::Generate("rust".to_string())))
        .await?;
    tx.send(SessionEvent::GenerationFinished {
        outcome: GenerationOutcome::Generated(Vec::new()),
    })
    .await?;
    tx.send(SessionEvent::Command(Command::Quit)).await?;

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let session = with_timeout(runtime.run()).await?;

    // An empty array is not an error, and it must not wipe a working map.
    assert_eq!(session.catalog().len(), 7);
    assert!(session.completed().contains("ADV100"));
    assert!(!session.is_generating());
    Ok(())
}

#[tokio::test]
async fn only_one_generation_request_is_in_flight() -> TestResult {
    init_tracing();

    let (generator, submitted) = SilentGenerator::new();
    let (tx, rx) = mpsc::channel(16);

    tx.send(SessionEvent::Command(Command::Generate("first".to_string())))
        .await?;
    tx.send(SessionEvent::Command(Command::Generate("second".to_string())))
        .await?;
    tx.send(SessionEvent::Command(Command::Quit)).await?;

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let session = with_timeout(runtime.run()).await?;

    // The second request was refused, not queued.
    assert_eq!(*submitted.lock().unwrap(), vec!["first".to_string()]);
    assert!(session.is_generating());
    Ok(())
}

#[tokio::test]
async fn generation_slot_frees_up_after_completion() -> TestResult {
    init_tracing();

    let (generator, submitted) = SilentGenerator::new();
    let (tx, rx) = mpsc::channel(16);

    tx.send(SessionEvent::Command(Command::Generate("first".to_string())))
        .await?;
    tx.send(SessionEvent::GenerationFinished {
        outcome: GenerationOutcome::Failed("boom".to_string()),
    })
    .await?;
    tx.send(SessionEvent::Command(Command::Generate("second".to_string())))
        .await?;
    tx.send(SessionEvent::Command(Command::Quit)).await?;

    let runtime = SessionRuntime::new(default_session(), rx, generator);
    let session = with_timeout(runtime.run()).await?;

    assert_eq!(
        *submitted.lock().unwrap(),
        vec!["first".to_string(), "second".to_string()]
    );
    assert!(session.is_generating());
    Ok(())
}
