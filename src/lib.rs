// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod generate;
pub mod layout;
pub mod logging;
pub mod render;
pub mod scene;
pub mod session;

use std::collections::HashSet;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::catalog::{Catalog, LoadReport, check_courses, default_courses, load_csv_path};
use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::load_or_default;
use crate::console::spawn_reader;
use crate::generate::{API_KEY_ENV, GeminiClient, HttpGeneratorBackend};
use crate::layout::LayoutSettings;
use crate::scene::category_progress;
use crate::session::{Session, SessionEvent, SessionRuntime};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings loading
/// - the starting catalog (built-in or `--courses` CSV)
/// - session runtime, console reader and generation worker
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(&args.config)?;

    // Starting catalog: CSV file when given, the bundled curriculum otherwise.
    let courses = match &args.courses {
        Some(path) => load_csv_path(path)?,
        None => default_courses(),
    };
    let report = check_courses(&courses);
    let catalog = Catalog::from_courses(courses);

    if args.dry_run {
        print_dry_run(&catalog, &report, &cfg);
        return Ok(());
    }

    let session = Session::new(catalog, args.filter, layout_settings(&cfg));

    print!("{}", render::render_load_report(&report));

    if args.once {
        print!("{}", render::render_scene(&session.scene()));
        let progress = session.progress();
        print!(
            "{}",
            render::render_progress(
                &progress,
                session.completed_count(),
                session.catalog().len()
            )
        );
        return Ok(());
    }

    // Session event channel.
    let (events_tx, events_rx) = mpsc::channel::<SessionEvent>(64);

    // Generation worker (real HTTP backend in production).
    let client = GeminiClient::from_config(&cfg.generate)?;
    if !client.has_api_key() {
        println!("Note: {API_KEY_ENV} is not set; the 'generate' command will be refused.");
    }
    let generator = HttpGeneratorBackend::new(events_tx.clone(), client);

    // Console reader.
    let _reader = spawn_reader(events_tx.clone());

    // Ctrl-C → graceful shutdown.
    {
        let tx = events_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(SessionEvent::ShutdownRequested).await;
        });
    }

    println!(
        "skilltree: {} courses loaded. Type 'help' for commands.",
        session.catalog().len()
    );

    let runtime = SessionRuntime::new(session, events_rx, generator);
    runtime.run().await?;
    Ok(())
}

/// Layout knobs from the `[layout]` section.
fn layout_settings(cfg: &ConfigFile) -> LayoutSettings {
    LayoutSettings {
        nodesep: cfg.layout.nodesep,
        ranksep: cfg.layout.ranksep,
        node_width: cfg.layout.node_width,
        node_height: cfg.layout.node_height,
    }
}

/// Simple dry-run output: catalog summary, warnings, effective settings.
fn print_dry_run(catalog: &Catalog, report: &LoadReport, cfg: &ConfigFile) {
    println!("skilltree dry-run");
    println!("  courses: {}", catalog.len());

    let groups = category_progress(catalog.courses(), &HashSet::new());
    for group in &groups {
        println!("  - {}: {} courses", group.category, group.total);
    }

    print!("{}", render::render_load_report(report));

    println!(
        "  layout: nodesep={} ranksep={} node={}x{}",
        cfg.layout.nodesep, cfg.layout.ranksep, cfg.layout.node_width, cfg.layout.node_height
    );
    println!("  generate.model: {}", cfg.generate.model);

    debug!("dry-run complete (no session started)");
}
