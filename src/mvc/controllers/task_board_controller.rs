// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use crate::mvc::{DisplayOrderModel, TaskBoardModel, TaskId, TaskSummary, traits::TaskRepository};

pub struct TaskBoardControllerCallbacks {
    pub on_refresh: Box<dyn Fn(TaskSummary)>,
}

pub struct TaskBoardController {
    model: TaskBoardModel,
    display_model: DisplayOrderModel,
    callbacks: TaskBoardControllerCallbacks,
}

impl TaskBoardController {
    pub fn new(
        repo: impl TaskRepository + 'static,
        callbacks: TaskBoardControllerCallbacks,
    ) -> Rc<Self> {
        let model = TaskBoardModel::new(repo);
        let display_model = DisplayOrderModel::new(model.clone());
        let controller = Rc::new(Self { model, display_model, callbacks });
        controller.refresh();
        controller
    }

    pub fn complete_all(&self) {
        if !self.model.complete_all() {
            log::debug!("All tasks already completed");
            return;
        }

        log::debug!("Completed all {} tasks", self.model.total_count());
        self.display_model.reset();
        self.refresh();
    }

    pub fn toggle_completion(&self, id: TaskId) {
        if !self.model.toggle_completion(id) {
            log::debug!("Ignoring toggle of unknown task {id:?}");
            return;
        }

        log::debug!("Toggled task {id:?}");
        self.display_model.reset();
        self.refresh();
    }

    pub fn model(&self) -> TaskBoardModel {
        self.model.clone()
    }

    pub fn display_model(&self) -> DisplayOrderModel {
        self.display_model.clone()
    }

    fn refresh(&self) {
        (self.callbacks.on_refresh)(self.model.summary());
    }
}
