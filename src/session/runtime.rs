// src/session/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::{EXAMPLE_CSV, load_csv_path, parse_csv};
use crate::console::{Command, LoadSource};
use crate::errors::Result;
use crate::generate::{GenerationJob, GenerationOutcome, GeneratorBackend};
use crate::render;
use crate::scene::derive_status;

use super::SessionEvent;
use super::state::{ResetOutcome, Session, ToggleOutcome};

/// Drives the session in response to `SessionEvent`s, and delegates
/// generation requests to a `GeneratorBackend`.
///
/// This owns the `Session`; all state mutation happens serially here. `run`
/// hands the final session back so callers (and tests) can inspect the end
/// state.
pub struct SessionRuntime<G: GeneratorBackend> {
    session: Session,
    events_rx: mpsc::Receiver<SessionEvent>,
    generator: G,

    /// Set after a `reset` on non-empty progress; the next line either
    /// confirms or cancels.
    awaiting_reset: bool,
}

impl<G: GeneratorBackend> fmt::Debug for SessionRuntime<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRuntime")
            .field("session", &self.session)
            .field("awaiting_reset", &self.awaiting_reset)
            .finish_non_exhaustive()
    }
}

impl<G: GeneratorBackend> SessionRuntime<G> {
    pub fn new(session: Session, events_rx: mpsc::Receiver<SessionEvent>, generator: G) -> Self {
        Self {
            session,
            events_rx,
            generator,
            awaiting_reset: false,
        }
    }

    /// Main event loop.
    ///
    /// - Consumes `SessionEvent`s from `events_rx`.
    /// - Applies them to the session and prints notices/renders.
    /// - Exits on `quit`, EOF, Ctrl-C, or when every sender is gone.
    pub async fn run(mut self) -> Result<Session> {
        info!("session runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "session received event");

            let keep_running = match event {
                SessionEvent::Command(command) => self.handle_command(command).await?,
                SessionEvent::GenerationFinished { outcome } => {
                    self.handle_generation_finished(outcome)
                }
                SessionEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping session");
                    false
                }
            };

            if !keep_running {
                break;
            }
        }

        info!("session runtime exiting");
        Ok(self.session)
    }

    async fn handle_command(&mut self, command: Command) -> Result<bool> {
        if self.awaiting_reset {
            return Ok(self.handle_reset_confirmation(command));
        }

        match command {
            Command::Toggle(id) => {
                if !self.session.catalog().contains(&id) {
                    warn!(course = %id, "toggling an ID that is not in the catalog");
                    println!("Note: '{id}' is not in the catalog.");
                }
                match self.session.toggle_completion(&id) {
                    ToggleOutcome::MarkedCompleted => println!("Marked '{id}' completed."),
                    ToggleOutcome::Unmarked => println!("Unmarked '{id}'."),
                }
            }
            Command::Reset => match self.session.reset_progress(false) {
                ResetOutcome::NothingToReset => println!("No progress to reset."),
                ResetOutcome::ConfirmationRequired => {
                    self.awaiting_reset = true;
                    println!(
                        "Reset all progress? This will uncheck every completed course. \
                         Type 'y' to confirm."
                    );
                }
                ResetOutcome::Cleared(count) => println!("Cleared {count} completed courses."),
            },
            Command::Confirm => println!("Nothing to confirm."),
            Command::Filter(mode) => {
                self.session.set_filter_mode(mode);
                println!("Filter set to '{}'.", mode.as_str());
            }
            Command::Search(query) => {
                self.session.set_search_query(query.as_str());
                match self.session.scene().focus(&query) {
                    Some(target) => println!("{}", render::render_camera(&target)),
                    None => println!("No course matches '{query}'."),
                }
            }
            Command::Details(id) => match self.session.catalog().get(&id) {
                Some(course) => {
                    let status = derive_status(course, self.session.completed());
                    println!("{}", render::render_details(course, status));
                }
                None => println!("No course with ID '{id}'."),
            },
            Command::Load(source) => self.handle_load(source),
            Command::Generate(topic) => return self.handle_generate(topic).await,
            Command::Map => println!("{}", render::render_scene(&self.session.scene())),
            Command::Progress => {
                let progress = self.session.progress();
                println!(
                    "{}",
                    render::render_progress(
                        &progress,
                        self.session.completed_count(),
                        self.session.catalog().len()
                    )
                );
            }
            Command::Help => println!("{}", render::help_text()),
            Command::Quit => {
                println!("Bye.");
                return Ok(false);
            }
            Command::Empty => {}
            Command::Invalid(message) => println!("{message}"),
        }

        Ok(true)
    }

    /// Resolve a pending reset prompt. `y`/`yes` clears, `quit` still
    /// quits, anything else cancels and is not otherwise processed.
    fn handle_reset_confirmation(&mut self, command: Command) -> bool {
        self.awaiting_reset = false;

        match command {
            Command::Confirm => {
                match self.session.reset_progress(true) {
                    ResetOutcome::Cleared(count) => {
                        println!("Cleared {count} completed courses.")
                    }
                    ResetOutcome::NothingToReset => println!("No progress to reset."),
                    ResetOutcome::ConfirmationRequired => {}
                }
                true
            }
            Command::Quit => {
                println!("Bye.");
                false
            }
            _ => {
                println!("Reset cancelled.");
                true
            }
        }
    }

    fn handle_load(&mut self, source: LoadSource) {
        let parsed = match &source {
            LoadSource::Example => parse_csv(EXAMPLE_CSV),
            LoadSource::Path(path) => load_csv_path(path),
        };

        match parsed {
            Ok(courses) => {
                let report = self.session.load_courses(courses);
                println!(
                    "Loaded {} courses; progress reset.",
                    self.session.catalog().len()
                );
                if report.has_warnings() {
                    println!("{}", render::render_load_report(&report));
                }
            }
            Err(err) => {
                warn!(error = %err, "course load failed");
                println!("Load failed: {err}");
            }
        }
    }

    async fn handle_generate(&mut self, topic: String) -> Result<bool> {
        if !self.session.begin_generation() {
            println!("A generation request is already in flight; wait for it to finish.");
            return Ok(true);
        }

        info!(topic = %topic, "generation requested");
        println!("Generating a curriculum for '{topic}'...");

        self.generator.submit(GenerationJob { topic }).await?;
        Ok(true)
    }

    fn handle_generation_finished(&mut self, outcome: GenerationOutcome) -> bool {
        match &outcome {
            GenerationOutcome::Generated(courses) if courses.is_empty() => {
                info!("generation returned no courses");
                println!("Generation returned no courses; catalog unchanged.");
            }
            GenerationOutcome::Generated(courses) => {
                info!(courses = courses.len(), "generation finished");
                println!("Generated {} courses; progress reset.", courses.len());
            }
            GenerationOutcome::Failed(reason) => {
                warn!(reason = %reason, "generation failed");
                println!("Generation failed: {reason}");
            }
        }

        if let Some(report) = self.session.finish_generation(outcome) {
            if report.has_warnings() {
                println!("{}", render::render_load_report(&report));
            }
        }

        true
    }
}
