//! Row model for the checklist TUI.

use crate::task::{Task, TaskGroup};

/// A renderable row: a group heading or an index into the task slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Header(TaskGroup),
    Task(usize),
}

/// Flatten the collection into render rows: each group's heading in
/// first-encounter order, followed by its tasks in original order.
pub fn build_rows(tasks: &[Task]) -> Vec<Row> {
    let mut groups: Vec<(TaskGroup, Vec<usize>)> = Vec::new();
    for (idx, task) in tasks.iter().enumerate() {
        match groups.iter_mut().find(|(group, _)| *group == task.group) {
            Some((_, members)) => members.push(idx),
            None => groups.push((task.group, vec![idx])),
        }
    }

    let mut rows = Vec::new();
    for (group, members) in groups {
        rows.push(Row::Header(group));
        rows.extend(members.into_iter().map(Row::Task));
    }
    rows
}

/// Task indices in render order
pub fn task_order(rows: &[Row]) -> Vec<usize> {
    rows.iter()
        .filter_map(|row| match row {
            Row::Task(idx) => Some(*idx),
            Row::Header(_) => None,
        })
        .collect()
}

/// Position (within `order`) of the previously selected id, falling back
/// to the first task.
pub fn select_by_id(tasks: &[Task], order: &[usize], previous: Option<&str>) -> Option<usize> {
    if order.is_empty() {
        return None;
    }
    let Some(previous) = previous else {
        return Some(0);
    };
    order
        .iter()
        .position(|idx| tasks[*idx].id == previous)
        .or(Some(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_tasks;

    #[test]
    fn rows_interleave_headers_and_tasks() {
        let tasks = default_tasks();
        let rows = build_rows(&tasks);

        // 33 tasks + 8 group headers
        assert_eq!(rows.len(), 41);
        assert!(matches!(rows[0], Row::Header(TaskGroup::OrganizeYourSpace)));
        assert!(matches!(rows[1], Row::Task(0)));

        let order = task_order(&rows);
        assert_eq!(order.len(), 33);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn selection_follows_id_across_rebuilds() {
        let tasks = default_tasks();
        let rows = build_rows(&tasks);
        let order = task_order(&rows);

        assert_eq!(select_by_id(&tasks, &order, None), Some(0));
        assert_eq!(select_by_id(&tasks, &order, Some("3")), Some(2));
        assert_eq!(select_by_id(&tasks, &order, Some("gone")), Some(0));
        assert_eq!(select_by_id(&[], &[], Some("1")), None);
    }
}
