//! Ordered task collection.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Tasks in insertion order, which is also display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a task to the end.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the task at `index`. Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<Task> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    /// Removes the first task equal to `task` in both id and text.
    pub fn remove(&mut self, task: &Task) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t == task)?;
        self.remove_at(index)
    }

    /// Returns task at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from(vec![
            Task::new(1, "Buy groceries"),
            Task::new(2, "Finish project"),
            Task::new(3, "Call Mom"),
        ])
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut list = TaskList::new();
        list.push(Task::new(9, "first"));
        list.push(Task::new(-4, "second"));

        let texts: Vec<_> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn test_remove_at_index() {
        let mut list = sample();

        let removed = list.remove_at(1);

        assert_eq!(removed, Some(Task::new(2, "Finish project")));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|t| t.id), Some(3));
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut list = sample();
        assert_eq!(list.remove_at(3), None);
        assert_eq!(list, sample());
    }

    #[test]
    fn test_remove_matches_text_when_ids_collide() {
        let mut list = TaskList::from(vec![Task::new(5, "a"), Task::new(5, "b")]);

        assert_eq!(list.remove(&Task::new(5, "b")), Some(Task::new(5, "b")));
        assert_eq!(list.as_slice(), [Task::new(5, "a")]);
        assert_eq!(list.remove(&Task::new(5, "zzz")), None);
    }

    #[test]
    fn test_remove_at_with_colliding_ids_takes_that_row() {
        let mut list = TaskList::from(vec![Task::new(7, "Buy milk"), Task::new(7, "Call Mom")]);

        assert_eq!(list.remove_at(1), Some(Task::new(7, "Call Mom")));
        assert_eq!(list.as_slice(), [Task::new(7, "Buy milk")]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list = TaskList::from(vec![Task::new(1, "x")]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":1,"text":"x"}]"#);

        let back: TaskList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
