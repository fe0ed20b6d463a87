// src/session/state.rs

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{Catalog, Course, LoadReport, check_courses};
use crate::generate::GenerationOutcome;
use crate::layout::LayoutSettings;
use crate::scene::{CategoryProgress, FilterMode, Scene, build_scene, category_progress};

/// Result of toggling a course ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    MarkedCompleted,
    Unmarked,
}

/// Result of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The completed set was already empty; nothing changed.
    NothingToReset,
    /// There is progress to clear and the caller has not confirmed yet.
    ConfirmationRequired,
    /// Progress was cleared; carries how many completions were dropped.
    Cleared(usize),
}

/// Mutable tracker state: the catalog, the completed set, and view settings.
///
/// Owned by the session runtime; every mutation happens serially on that
/// task. Scenes and progress listings are derived values computed from the
/// latest snapshot, so no partially-updated state is ever observable.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    completed: HashSet<String>,
    filter: FilterMode,
    search_query: String,
    settings: LayoutSettings,
    generating: bool,
}

impl Session {
    pub fn new(catalog: Catalog, filter: FilterMode, settings: LayoutSettings) -> Self {
        Self {
            catalog,
            completed: HashSet::new(),
            filter,
            search_query: String::new(),
            settings,
            generating: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn completed(&self) -> &HashSet<String> {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Flip completion membership for an ID.
    ///
    /// The completed set is pure membership: IDs that name no catalog course
    /// still toggle, they just never unlock anything on their own.
    pub fn toggle_completion(&mut self, id: &str) -> ToggleOutcome {
        if self.completed.remove(id) {
            debug!(course = %id, "completion unmarked");
            ToggleOutcome::Unmarked
        } else {
            self.completed.insert(id.to_string());
            debug!(course = %id, "completion marked");
            ToggleOutcome::MarkedCompleted
        }
    }

    /// Clear all progress, in two steps.
    ///
    /// An empty set reports `NothingToReset` without asking for
    /// confirmation. A non-empty set requires `confirmed = true` before
    /// anything is dropped.
    pub fn reset_progress(&mut self, confirmed: bool) -> ResetOutcome {
        if self.completed.is_empty() {
            return ResetOutcome::NothingToReset;
        }
        if !confirmed {
            return ResetOutcome::ConfirmationRequired;
        }
        let cleared = self.completed.len();
        self.completed.clear();
        debug!(cleared, "progress reset");
        ResetOutcome::Cleared(cleared)
    }

    /// Replace the whole catalog and clear all progress.
    ///
    /// The returned report carries load-time warnings (duplicate IDs,
    /// dangling prerequisites, cycles); none of them block the load.
    pub fn load_courses(&mut self, courses: Vec<Course>) -> LoadReport {
        let report = check_courses(&courses);
        self.catalog = Catalog::from_courses(courses);
        self.completed.clear();
        debug!(courses = self.catalog.len(), "catalog replaced");
        report
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Claim the single generation slot. Returns false when a request is
    /// already outstanding.
    pub fn begin_generation(&mut self) -> bool {
        if self.generating {
            return false;
        }
        self.generating = true;
        true
    }

    /// Record a finished generation request.
    ///
    /// The in-flight flag clears on every outcome. The catalog is replaced
    /// only when generation succeeded with a non-empty course list; the
    /// report for that load is handed back so callers can surface warnings.
    pub fn finish_generation(&mut self, outcome: GenerationOutcome) -> Option<LoadReport> {
        self.generating = false;
        match outcome {
            GenerationOutcome::Generated(courses) if !courses.is_empty() => {
                Some(self.load_courses(courses))
            }
            GenerationOutcome::Generated(_) | GenerationOutcome::Failed(_) => None,
        }
    }

    /// Build the renderable scene for the current snapshot.
    pub fn scene(&self) -> Scene {
        build_scene(&self.catalog, &self.completed, self.filter, &self.settings)
    }

    /// Per-category completion tallies for the current snapshot.
    pub fn progress(&self) -> Vec<CategoryProgress> {
        category_progress(self.catalog.courses(), &self.completed)
    }
}
