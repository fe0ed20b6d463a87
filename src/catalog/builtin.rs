// src/catalog/builtin.rs

use crate::catalog::model::Course;

/// The starter curriculum loaded when no catalog is given.
///
/// Small enough to read at a glance, but it exercises every interesting
/// shape: parallel branches, a milestone with no prerequisites, a diamond
/// join and a single deep leaf.
pub fn default_courses() -> Vec<Course> {
    vec![
        course(
            "ADV100",
            "Novice Adventuring",
            &[],
            "Basics",
            "The beginning of your journey.",
        ),
        course(
            "MAG100",
            "Mana Control",
            &["ADV100"],
            "Magic",
            "Learn to sense the flow of mana.",
        ),
        course(
            "SWD100",
            "Sword Basics",
            &["ADV100"],
            "Combat",
            "Keep the pointy end away from you.",
        ),
        course(
            "REQ_BASICS",
            "Basic Training Complete",
            &[],
            "Milestone",
            "Check this box when you have finished ANY 2 basic courses.",
        ),
        course(
            "MAG200",
            "Fireball Casting",
            &["MAG100", "REQ_BASICS"],
            "Magic",
            "It's getting hot in here.",
        ),
        course(
            "SWD200",
            "Dual Wielding",
            &["SWD100", "REQ_BASICS"],
            "Combat",
            "Two swords are better than one.",
        ),
        course(
            "ULT300",
            "Spellblade Mastery",
            &["MAG200", "SWD200"],
            "Ultimate",
            "The ultimate fusion of steel and sorcery.",
        ),
    ]
}

fn course(
    id: &str,
    title: &str,
    prerequisites: &[&str],
    category: &str,
    description: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        category: Some(category.to_string()),
        description: Some(description.to_string()),
        objectives: None,
    }
}
