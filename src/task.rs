//! Task records and pure collection transformations
//!
//! Every mutation is a pure function from the current collection to a
//! new one; the persisted cell commits the result. Toggle and remove are
//! no-ops for unknown ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::Error;

/// Provenance marker distinguishing seeded tasks from user additions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Default,
    Custom,
}

/// One of the eight fixed topical buckets, or the catch-all `custom`
/// bucket for ungrouped user additions.
///
/// Serialized as the display labels the original storage format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskGroup {
    #[serde(rename = "Organize Your Space")]
    OrganizeYourSpace,
    #[serde(rename = "Prioritize Tasks")]
    PrioritizeTasks,
    #[serde(rename = "Technology Boundaries")]
    TechnologyBoundaries,
    #[serde(rename = "Mindfulness")]
    Mindfulness,
    #[serde(rename = "Information Management")]
    InformationManagement,
    #[serde(rename = "Brain Dump & Goals")]
    BrainDumpGoals,
    #[serde(rename = "Breaks & Self-Care")]
    BreaksSelfCare,
    #[serde(rename = "Gratitude & Boundaries")]
    GratitudeBoundaries,
    #[serde(rename = "custom")]
    Custom,
}

impl TaskGroup {
    /// All groups in seed order, the custom bucket last
    pub const ALL: [TaskGroup; 9] = [
        TaskGroup::OrganizeYourSpace,
        TaskGroup::PrioritizeTasks,
        TaskGroup::TechnologyBoundaries,
        TaskGroup::Mindfulness,
        TaskGroup::InformationManagement,
        TaskGroup::BrainDumpGoals,
        TaskGroup::BreaksSelfCare,
        TaskGroup::GratitudeBoundaries,
        TaskGroup::Custom,
    ];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            TaskGroup::OrganizeYourSpace => "Organize Your Space",
            TaskGroup::PrioritizeTasks => "Prioritize Tasks",
            TaskGroup::TechnologyBoundaries => "Technology Boundaries",
            TaskGroup::Mindfulness => "Mindfulness",
            TaskGroup::InformationManagement => "Information Management",
            TaskGroup::BrainDumpGoals => "Brain Dump & Goals",
            TaskGroup::BreaksSelfCare => "Breaks & Self-Care",
            TaskGroup::GratitudeBoundaries => "Gratitude & Boundaries",
            TaskGroup::Custom => "custom",
        }
    }

    /// Whether this is the sentinel bucket for ungrouped additions
    pub fn is_custom_bucket(&self) -> bool {
        matches!(self, TaskGroup::Custom)
    }
}

impl fmt::Display for TaskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TaskGroup {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        TaskGroup::ALL
            .into_iter()
            .find(|group| group.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownGroup(trimmed.to_string()))
    }
}

/// A single checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub category: Category,
    pub group: TaskGroup,
}

impl Task {
    /// Construct a user-created task with a fresh id.
    ///
    /// Category follows the group: the custom sentinel marks the task
    /// as a user addition, any named bucket yields a default-category
    /// task.
    pub fn new(text: impl Into<String>, group: TaskGroup) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
            completed: false,
            category: if group.is_custom_bucket() {
                Category::Custom
            } else {
                Category::Default
            },
            group,
        }
    }
}

/// Fresh unique task id: a ULID, timestamp-derived and monotonic-ish,
/// never colliding with the numeric seed ids.
pub fn generate_id() -> String {
    Ulid::new().to_string()
}

/// Invert `completed` for the matching id; unchanged when absent
pub fn toggle(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    completed: !task.completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Exclude the matching id; unchanged when absent
pub fn remove(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.id != id)
        .cloned()
        .collect()
}

/// Append a new task built from trimmed text and a group.
///
/// Callers trim and reject empty text before invoking.
pub fn add(tasks: &[Task], text: &str, group: TaskGroup) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(Task::new(text, group));
    next
}

/// Ordered partition by group: groups appear in order of first
/// encounter, tasks keep their original relative order within a group.
pub fn group_tasks(tasks: &[Task]) -> Vec<(TaskGroup, Vec<&Task>)> {
    let mut groups: Vec<(TaskGroup, Vec<&Task>)> = Vec::new();
    for task in tasks {
        match groups.iter_mut().find(|(group, _)| *group == task.group) {
            Some((_, members)) => members.push(task),
            None => groups.push((task.group, vec![task])),
        }
    }
    groups
}

/// Count of completed tasks
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.completed).count()
}

/// Completion percentage rounded to the nearest integer; 0 for an empty
/// collection.
pub fn progress_percent(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = completed_count(tasks) as f64;
    ((done / tasks.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_tasks;

    #[test]
    fn toggle_inverts_only_the_match() {
        let tasks = default_tasks();
        let toggled = toggle(&tasks, "1");
        assert!(toggled[0].completed);
        assert!(toggled[1..].iter().all(|task| !task.completed));

        // Toggle parity: twice restores the seed value
        let restored = toggle(&toggled, "1");
        assert_eq!(restored, tasks);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let tasks = default_tasks();
        assert_eq!(toggle(&tasks, "no-such-id"), tasks);
    }

    #[test]
    fn remove_is_idempotent() {
        let tasks = default_tasks();
        let once = remove(&tasks, "5");
        assert_eq!(once.len(), tasks.len() - 1);
        assert!(once.iter().all(|task| task.id != "5"));

        let twice = remove(&once, "5");
        assert_eq!(twice, once);
    }

    #[test]
    fn add_appends_with_fresh_id() {
        let tasks = default_tasks();
        let next = add(&tasks, "Call mom", TaskGroup::Mindfulness);

        assert_eq!(next.len(), tasks.len() + 1);
        let created = next.last().unwrap();
        assert_eq!(created.text, "Call mom");
        assert_eq!(created.group, TaskGroup::Mindfulness);
        assert_eq!(created.category, Category::Default);
        assert!(!created.completed);
        assert!(tasks.iter().all(|task| task.id != created.id));
    }

    #[test]
    fn add_custom_sentinel_marks_category() {
        let next = add(&[], "My own task", TaskGroup::Custom);
        assert_eq!(next[0].category, Category::Custom);
    }

    #[test]
    fn grouping_preserves_first_encounter_order() {
        let mut tasks = vec![
            Task::new("b", TaskGroup::Mindfulness),
            Task::new("c", TaskGroup::Custom),
            Task::new("d", TaskGroup::Mindfulness),
        ];
        tasks[0].completed = true;

        let groups = group_tasks(&tasks);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, TaskGroup::Mindfulness);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[0].text, "b");
        assert_eq!(groups[0].1[1].text, "d");
        assert_eq!(groups[1].0, TaskGroup::Custom);
    }

    #[test]
    fn progress_rounding() {
        assert_eq!(progress_percent(&[]), 0);

        let tasks = default_tasks();
        assert_eq!(progress_percent(&tasks), 0);

        let one_done = toggle(&tasks, "1");
        assert_eq!(completed_count(&one_done), 1);
        assert_eq!(progress_percent(&one_done), 3); // 1/33 rounds to 3

        let mut all_done = tasks.clone();
        for task in &mut all_done {
            task.completed = true;
        }
        assert_eq!(progress_percent(&all_done), 100);
    }

    #[test]
    fn group_labels_round_trip_serde() {
        let json = serde_json::to_string(&TaskGroup::BrainDumpGoals).unwrap();
        assert_eq!(json, "\"Brain Dump & Goals\"");
        let back: TaskGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TaskGroup::BrainDumpGoals);

        assert_eq!(
            serde_json::to_string(&TaskGroup::Custom).unwrap(),
            "\"custom\""
        );
    }

    #[test]
    fn group_parse_accepts_labels_case_insensitively() {
        assert_eq!(
            "mindfulness".parse::<TaskGroup>().unwrap(),
            TaskGroup::Mindfulness
        );
        assert_eq!(
            "Breaks & Self-Care".parse::<TaskGroup>().unwrap(),
            TaskGroup::BreaksSelfCare
        );
        assert!("Chores".parse::<TaskGroup>().is_err());
    }

    #[test]
    fn task_serialization_matches_stored_shape() {
        let task = Task {
            id: "1".to_string(),
            text: "Declutter your desk or workspace".to_string(),
            completed: false,
            category: Category::Default,
            group: TaskGroup::OrganizeYourSpace,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "text": "Declutter your desk or workspace",
                "completed": false,
                "category": "default",
                "group": "Organize Your Space",
            })
        );
    }
}
