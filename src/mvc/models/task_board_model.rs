// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use super::{TaskId, TaskModel};
use crate::mvc::traits::TaskRepository;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub remaining: usize,
    pub completed: usize,
    pub total: usize,
}

/// Owns the task collection of the board.
///
/// All aggregates are derived from the repository on every call, nothing is cached.
#[derive(Clone)]
pub struct TaskBoardModel {
    repo: Rc<dyn TaskRepository>,
}

impl TaskBoardModel {
    pub fn new(repo: impl TaskRepository + 'static) -> Self {
        Self { repo: Rc::new(repo) }
    }

    pub fn tasks(&self) -> Vec<TaskModel> {
        self.repo.tasks()
    }

    pub fn remaining_count(&self) -> usize {
        self.repo.tasks().iter().filter(|task| !task.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.repo.tasks().iter().filter(|task| task.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.repo.task_count()
    }

    pub fn summary(&self) -> TaskSummary {
        let tasks = self.repo.tasks();
        let completed = tasks.iter().filter(|task| task.completed).count();

        TaskSummary { remaining: tasks.len() - completed, completed, total: tasks.len() }
    }

    /// Completed tasks first, then the open ones. Both groups keep insertion order.
    pub fn display_order(&self) -> Vec<TaskModel> {
        let (mut ordered, open): (Vec<_>, Vec<_>) =
            self.repo.tasks().into_iter().partition(|task| task.completed);

        ordered.extend(open);
        ordered
    }

    /// Returns `true` if at least one task changed.
    pub fn complete_all(&self) -> bool {
        self.repo.complete_all() > 0
    }

    /// Unknown ids are ignored. Returns `true` if a task was toggled.
    pub fn toggle_completion(&self, id: TaskId) -> bool {
        self.repo.toggle_done(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvc::{self, ColorTag, TaskSeed};

    fn default_model() -> TaskBoardModel {
        TaskBoardModel::new(mvc::InMemoryTaskRepository::new(mvc::default_seed()))
    }

    fn ids(tasks: &[TaskModel]) -> Vec<u32> {
        tasks.iter().map(|task| task.id.0).collect()
    }

    // every task shows up once, completed ones come first and both groups keep source order
    fn assert_display_order(model: &TaskBoardModel) {
        let tasks = model.tasks();
        let order = model.display_order();

        let mut sorted_ids = ids(&order);
        sorted_ids.sort();
        assert_eq!(sorted_ids, ids(&tasks));

        let split = order.iter().position(|task| !task.completed).unwrap_or(order.len());
        assert!(order[..split].iter().all(|task| task.completed));
        assert!(order[split..].iter().all(|task| !task.completed));

        let expected_done: Vec<_> = tasks.iter().filter(|task| task.completed).cloned().collect();
        let expected_open: Vec<_> = tasks.iter().filter(|task| !task.completed).cloned().collect();
        assert_eq!(order[..split], expected_done[..]);
        assert_eq!(order[split..], expected_open[..]);
    }

    #[test]
    fn test_default_seed_counts() {
        let model = default_model();

        assert_eq!(model.remaining_count(), 3);
        assert_eq!(model.completed_count(), 3);
        assert_eq!(model.total_count(), 6);
        assert_eq!(model.summary(), TaskSummary { remaining: 3, completed: 3, total: 6 });
        assert_eq!(ids(&model.display_order()), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_toggle_then_complete_all() {
        let model = default_model();

        assert!(model.toggle_completion(TaskId(4)));
        assert_eq!(model.remaining_count(), 2);
        assert_eq!(model.completed_count(), 4);
        assert_display_order(&model);
        assert_eq!(ids(&model.display_order()), vec![0, 1, 2, 4, 3, 5]);

        model.complete_all();
        assert_eq!(model.remaining_count(), 0);
        assert_eq!(model.completed_count(), 6);
        assert_display_order(&model);
    }

    #[test]
    fn test_complete_all_is_idempotent() {
        let model = default_model();

        assert!(model.complete_all());
        let once = model.tasks();

        assert!(!model.complete_all());
        assert_eq!(model.tasks(), once);
        assert_eq!(model.remaining_count(), 0);
        assert_eq!(model.completed_count(), model.total_count());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let model = default_model();
        let before = model.tasks();

        for task in &before {
            model.toggle_completion(task.id);
            model.toggle_completion(task.id);
            assert_eq!(model.tasks(), before);
        }
    }

    #[test]
    fn test_toggle_changes_only_target() {
        let model = default_model();
        let before = model.tasks();

        model.toggle_completion(TaskId(1));

        for (old, new) in before.iter().zip(model.tasks()) {
            if old.id == TaskId(1) {
                assert_eq!(new.completed, !old.completed);
            } else {
                assert_eq!(&new, old);
            }
        }
    }

    #[test]
    fn test_toggle_unknown_id() {
        let model = default_model();
        let before = model.tasks();

        assert!(!model.toggle_completion(TaskId(42)));
        assert_eq!(model.tasks(), before);
    }

    #[test]
    fn test_display_order_does_not_reorder_tasks() {
        let model = TaskBoardModel::new(mvc::InMemoryTaskRepository::new(vec![
            TaskSeed { title: "A".into(), completed: false, ..Default::default() },
            TaskSeed { title: "B".into(), completed: true, ..Default::default() },
            TaskSeed { title: "C".into(), completed: false, ..Default::default() },
            TaskSeed {
                title: "D".into(),
                completed: true,
                color_tag: ColorTag::NoteTab,
                ..Default::default()
            },
        ]));

        assert_eq!(ids(&model.display_order()), vec![1, 3, 0, 2]);
        assert_eq!(ids(&model.tasks()), vec![0, 1, 2, 3]);
        assert_display_order(&model);

        model.toggle_completion(TaskId(1));
        assert_eq!(ids(&model.display_order()), vec![3, 0, 1, 2]);
        assert_display_order(&model);
    }

    #[test]
    fn test_empty_board() {
        let model = TaskBoardModel::new(mvc::InMemoryTaskRepository::new(Vec::new()));

        assert_eq!(model.summary(), TaskSummary::default());
        assert!(model.display_order().is_empty());
        assert!(!model.complete_all());
    }
}
