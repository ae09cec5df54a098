// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use super::{TaskSeed, traits};
use crate::mvc::{TaskId, TaskModel};

#[derive(Clone)]
pub struct InMemoryTaskRepository {
    tasks: Rc<RefCell<Vec<TaskModel>>>,
}

impl InMemoryTaskRepository {
    /// Ids are handed out in seed order, starting at zero.
    pub fn new(seed: impl IntoIterator<Item = TaskSeed>) -> Self {
        let tasks = seed
            .into_iter()
            .zip(0..)
            .map(|(seed, id)| TaskModel {
                id: TaskId(id),
                color_tag: seed.color_tag,
                title: seed.title,
                date_label: seed.date_label,
                completed: seed.completed,
            })
            .collect();

        Self { tasks: Rc::new(RefCell::new(tasks)) }
    }
}

impl traits::TaskRepository for InMemoryTaskRepository {
    fn task_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn tasks(&self) -> Vec<TaskModel> {
        self.tasks.borrow().clone()
    }

    fn toggle_done(&self, id: TaskId) -> bool {
        if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
            return true;
        }

        false
    }

    fn complete_all(&self) -> usize {
        let mut changed = 0;

        for task in self.tasks.borrow_mut().iter_mut().filter(|task| !task.completed) {
            task.completed = true;
            changed += 1;
        }

        changed
    }
}
