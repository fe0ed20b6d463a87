// src/catalog/csv.rs

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::catalog::model::Course;
use crate::errors::{Result, SkilltreeError};

/// Category assigned to CSV rows without one.
const DEFAULT_CATEGORY: &str = "General";

/// Parse course rows from CSV text.
///
/// Format, one course per line:
///
/// ```text
/// Course Code, Title, Prerequisites (separated by ;), Category, Description
/// ```
///
/// Rules:
/// - An optional header line is skipped when the first line contains the
///   word "code" (case-insensitive).
/// - Blank lines and lines with fewer than 2 fields are skipped.
/// - Fields are split on commas, trimmed, and stripped of one leading and
///   one trailing double quote.
/// - Prerequisites are split on `;`, trimmed, empty entries dropped.
/// - A missing or empty category defaults to "General"; a missing
///   description defaults to empty.
///
/// Producing zero courses is an input-format error so callers never replace
/// a working catalog with nothing.
pub fn parse_csv(text: &str) -> Result<Vec<Course>> {
    let mut courses = Vec::new();

    for (index, line) in text.trim().lines().enumerate() {
        if index == 0 && is_header(line) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<String> = line.split(',').map(clean_field).collect();
        if fields.len() < 2 {
            continue;
        }

        let prerequisites = fields
            .get(2)
            .map(|raw| split_prerequisites(raw))
            .unwrap_or_default();

        let category = match fields.get(3) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => DEFAULT_CATEGORY.to_string(),
        };

        let description = fields.get(4).cloned().unwrap_or_default();

        courses.push(Course {
            id: fields[0].clone(),
            title: fields[1].clone(),
            prerequisites,
            category: Some(category),
            description: Some(description),
            objectives: None,
        });
    }

    if courses.is_empty() {
        return Err(SkilltreeError::CsvError(
            "no valid courses found, check the format".to_string(),
        ));
    }

    Ok(courses)
}

/// Read and parse a CSV catalog file.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<Vec<Course>> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading course CSV at {:?}", path))?;
    parse_csv(&contents)
}

fn is_header(line: &str) -> bool {
    line.to_lowercase().contains("code")
}

/// Trim a raw field and strip one leading and one trailing double quote.
/// The quote stripping is independent on each end, so a lone quote also
/// disappears.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

fn split_prerequisites(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Example catalog in the supported CSV format.
pub const EXAMPLE_CSV: &str = "\
Course Code, Title, Prerequisites (separated by ;), Category, Description
ADV100, Novice Adventuring, , Basics, Introduction to the world.
MAG100, Mana Control, ADV100, Magic, Learn to harness inner energy.
SWD100, Sword Basics, ADV100, Combat, Pointy end goes into the other guy.
REQ_BASICS, Basic Training Complete, , Milestone, Check this box when you have finished ANY 2 basic courses.
MAG200, Fireball Casting, MAG100; REQ_BASICS, Magic, Create and throw balls of fire.
SWD200, Dual Wielding, SWD100; REQ_BASICS, Combat, Fighting with two weapons.
ULT300, Spellblade Mastery, MAG200; SWD200, Ultimate, Combine magic and steel.";
