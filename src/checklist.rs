//! Checklist store: binds the pure task operations to the persisted cell.
//!
//! The store owns the only live copy of the collection. Mutators compute
//! a new collection, commit it through the cell (which persists and
//! notifies observers), and report whether anything changed.

use crate::error::{Error, Result};
use crate::seed;
use crate::storage::{Storage, TASKS_KEY};
use crate::store::PersistedCell;
use crate::task::{self, Task, TaskGroup};

pub struct ChecklistStore {
    cell: PersistedCell<Vec<Task>>,
}

impl ChecklistStore {
    /// Open the checklist, seeding the default collection when storage
    /// is absent or unreadable.
    pub fn open(storage: Storage) -> Self {
        let cell = PersistedCell::load(storage, TASKS_KEY, seed::default_tasks());
        Self { cell }
    }

    pub fn tasks(&self) -> &[Task] {
        self.cell.get()
    }

    pub fn completed_count(&self) -> usize {
        task::completed_count(self.tasks())
    }

    pub fn progress_percent(&self) -> u8 {
        task::progress_percent(self.tasks())
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks().iter().find(|task| task.id == id)
    }

    /// Register an observer on the underlying cell
    pub fn subscribe(&mut self, listener: impl FnMut(&Vec<Task>) + 'static) {
        self.cell.subscribe(listener);
    }

    /// Invert completion for `id`. Returns false (and commits nothing)
    /// when the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        let id = id.to_string();
        self.cell.update(|tasks| task::toggle(tasks, &id));
        true
    }

    /// Delete the task with `id`. Returns false when the id is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        let id = id.to_string();
        self.cell.update(|tasks| task::remove(tasks, &id));
        true
    }

    /// Append a new task; rejects empty or whitespace-only text.
    pub fn add(&mut self, text: &str, group: TaskGroup) -> Result<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidArgument(
                "task text cannot be empty".to_string(),
            ));
        }
        let created = Task::new(text, group);
        let appended = created.clone();
        self.cell.update(move |tasks| {
            let mut next = tasks.clone();
            next.push(appended);
            next
        });
        Ok(created)
    }

    /// Replace the collection with the default seed, discarding custom
    /// tasks and completion state. Confirmation is the caller's concern.
    pub fn reset(&mut self) {
        self.cell.set(seed::default_tasks());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, ChecklistStore) {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        storage.init().unwrap();
        (temp, ChecklistStore::open(storage))
    }

    #[test]
    fn opens_with_seed_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        storage.init().unwrap();

        let mut store = ChecklistStore::open(storage.clone());
        assert_eq!(store.tasks().len(), 33);

        store.toggle("1");
        let created = store.add("Call mom", TaskGroup::Mindfulness).unwrap();

        // A fresh load from the same storage sees the committed state
        let reloaded = ChecklistStore::open(storage);
        assert_eq!(reloaded.tasks(), store.tasks());
        assert!(reloaded.find("1").unwrap().completed);
        assert!(reloaded.find(&created.id).is_some());
    }

    #[test]
    fn toggle_reports_unknown_ids() {
        let (_temp, mut store) = open_store();
        assert!(store.toggle("1"));
        assert!(!store.toggle("missing"));
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn add_rejects_blank_text() {
        let (_temp, mut store) = open_store();
        assert!(store.add("   ", TaskGroup::Custom).is_err());
        assert_eq!(store.tasks().len(), 33);
    }

    #[test]
    fn reset_restores_seed_and_is_idempotent() {
        let (_temp, mut store) = open_store();
        store.toggle("2");
        store.add("extra", TaskGroup::Custom).unwrap();
        store.delete("1");

        store.reset();
        assert_eq!(store.tasks(), crate::seed::default_tasks().as_slice());

        store.reset();
        assert_eq!(store.tasks(), crate::seed::default_tasks().as_slice());
    }

    #[test]
    fn progress_scenario_one_of_33() {
        let (_temp, mut store) = open_store();
        store.toggle("1");
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.progress_percent(), 3);

        store.toggle("1");
        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.progress_percent(), 0);
    }
}
