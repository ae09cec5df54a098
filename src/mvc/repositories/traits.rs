// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::mvc::{TaskId, TaskModel};

pub trait TaskRepository {
    fn task_count(&self) -> usize;

    /// All tasks in insertion order.
    fn tasks(&self) -> Vec<TaskModel>;

    /// Returns `false` if no task has the given id.
    fn toggle_done(&self, id: TaskId) -> bool;

    /// Returns the number of tasks that were not completed before.
    fn complete_all(&self) -> usize;
}
