//! Mutations invoked from the TUI, reported back as outcomes.

use crate::checklist::ChecklistStore;
use crate::error::Result;
use crate::task::TaskGroup;

#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub changed: bool,
    pub message: String,
}

pub fn toggle_task(store: &mut ChecklistStore, id: &str) -> ActionOutcome {
    if store.toggle(id) {
        let completed = store.find(id).map(|task| task.completed).unwrap_or(false);
        let state = if completed { "completed" } else { "reopened" };
        ActionOutcome {
            changed: true,
            message: format!("{state} {id}"),
        }
    } else {
        ActionOutcome {
            changed: false,
            message: format!("no task with id '{id}'"),
        }
    }
}

pub fn delete_task(store: &mut ChecklistStore, id: &str) -> ActionOutcome {
    if store.delete(id) {
        ActionOutcome {
            changed: true,
            message: format!("deleted {id}"),
        }
    } else {
        ActionOutcome {
            changed: false,
            message: format!("no task with id '{id}'"),
        }
    }
}

pub fn add_task(store: &mut ChecklistStore, text: &str, group: TaskGroup) -> Result<ActionOutcome> {
    let created = store.add(text, group)?;
    Ok(ActionOutcome {
        changed: true,
        message: format!("added {}", created.id),
    })
}

pub fn reset_tasks(store: &mut ChecklistStore) -> ActionOutcome {
    store.reset();
    ActionOutcome {
        changed: true,
        message: "checklist reset to defaults".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, ChecklistStore) {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        storage.init().unwrap();
        (temp, ChecklistStore::open(storage))
    }

    #[test]
    fn toggle_reports_state_change() {
        let (_temp, mut store) = open_store();

        let outcome = toggle_task(&mut store, "1");
        assert!(outcome.changed);
        assert_eq!(outcome.message, "completed 1");

        let outcome = toggle_task(&mut store, "1");
        assert_eq!(outcome.message, "reopened 1");

        let outcome = toggle_task(&mut store, "missing");
        assert!(!outcome.changed);
    }

    #[test]
    fn add_then_delete_round_trip() {
        let (_temp, mut store) = open_store();

        let outcome = add_task(&mut store, "Water the plants", TaskGroup::Custom).unwrap();
        assert!(outcome.changed);
        assert_eq!(store.tasks().len(), 34);

        let id = store.tasks().last().unwrap().id.clone();
        let outcome = delete_task(&mut store, &id);
        assert!(outcome.changed);
        assert_eq!(store.tasks().len(), 33);
    }

    #[test]
    fn reset_outcome_restores_seed() {
        let (_temp, mut store) = open_store();
        toggle_task(&mut store, "1");
        let outcome = reset_tasks(&mut store);
        assert!(outcome.changed);
        assert_eq!(store.completed_count(), 0);
    }
}
