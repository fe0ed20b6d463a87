// tests/catalog_model.rs

use skilltree_test_utils::builders::{CatalogBuilder, CourseBuilder};

use skilltree::catalog::{Catalog, check_courses};

#[test]
fn catalog_preserves_load_order() {
    let catalog = CatalogBuilder::new()
        .with_chain("C", &[])
        .with_chain("A", &[])
        .with_chain("B", &[])
        .build();

    let ids: Vec<&str> = catalog.courses().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "A", "B"]);
    assert_eq!(catalog.position("A"), Some(1));
    assert_eq!(catalog.position("GHOST"), None);
}

#[test]
fn duplicate_ids_collapse_to_the_last_occurrence() {
    let catalog = CatalogBuilder::new()
        .with_course(CourseBuilder::new("X").title("First").build())
        .with_course(CourseBuilder::new("Y").build())
        .with_course(CourseBuilder::new("X").title("Second").build())
        .build();

    assert_eq!(catalog.len(), 2);
    // The duplicate keeps the first occurrence's list position.
    assert_eq!(catalog.position("X"), Some(0));
    assert_eq!(catalog.get("X").map(|c| c.title.as_str()), Some("Second"));
}

#[test]
fn lookup_by_id() {
    let catalog = CatalogBuilder::new().with_chain("A", &[]).build();

    assert!(catalog.contains("A"));
    assert!(!catalog.contains("B"));
    assert!(catalog.get("B").is_none());
    assert!(!catalog.is_empty());
    assert!(Catalog::new().is_empty());
}

#[test]
fn check_courses_reports_duplicates_once() {
    let courses = CatalogBuilder::new()
        .with_chain("X", &[])
        .with_chain("X", &[])
        .with_chain("X", &[])
        .courses();

    let report = check_courses(&courses);
    assert_eq!(report.course_count, 3);
    assert_eq!(report.duplicate_ids, vec!["X"]);
    assert!(report.has_warnings());
}

#[test]
fn check_courses_reports_dangling_prerequisites() {
    let courses = CatalogBuilder::new()
        .with_chain("A", &[])
        .with_chain("B", &["A", "GHOST"])
        .courses();

    let report = check_courses(&courses);
    assert_eq!(
        report.dangling,
        vec![("B".to_string(), "GHOST".to_string())]
    );
    assert!(report.cycle.is_none());
}

#[test]
fn check_courses_detects_prerequisite_cycles() {
    let courses = CatalogBuilder::new()
        .with_chain("A", &["B"])
        .with_chain("B", &["A"])
        .courses();

    let report = check_courses(&courses);
    let on_cycle = report.cycle.expect("cycle should be reported");
    assert!(on_cycle == "A" || on_cycle == "B");
}

#[test]
fn self_prerequisite_counts_as_a_cycle() {
    let courses = CatalogBuilder::new().with_chain("A", &["A"]).courses();

    let report = check_courses(&courses);
    assert_eq!(report.cycle.as_deref(), Some("A"));
}

#[test]
fn dangling_edges_never_close_a_cycle() {
    // B's unknown prerequisite shares a name with nothing; the graph built
    // from known IDs stays acyclic.
    let courses = CatalogBuilder::new()
        .with_chain("A", &["GHOST"])
        .with_chain("B", &["A"])
        .courses();

    let report = check_courses(&courses);
    assert!(report.cycle.is_none());
    assert_eq!(report.dangling.len(), 1);
}

#[test]
fn clean_catalog_has_no_warnings() {
    let courses = CatalogBuilder::new()
        .with_chain("A", &[])
        .with_chain("B", &["A"])
        .courses();

    let report = check_courses(&courses);
    assert!(!report.has_warnings());
}
