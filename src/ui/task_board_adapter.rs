// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    mvc::{TaskBoardController, TaskBoardControllerCallbacks, TaskId, TaskModel, color_for_tag},
    ui,
};

pub fn create_controller_callbacks(view_handle: &ui::MainWindow) -> TaskBoardControllerCallbacks {
    TaskBoardControllerCallbacks {
        on_refresh: Box::new({
            let view_handle = view_handle.as_weak();

            move |summary| {
                let view_handle = view_handle.unwrap();
                let adapter = ui::TaskBoardAdapter::get(&view_handle);
                adapter.set_remaining_count(summary.remaining as i32);
                adapter.set_completed_count(summary.completed as i32);
                adapter.set_total_count(summary.total as i32);
            }
        }),
    }
}

pub fn initialize_adapter(view_handle: &ui::MainWindow, controller: Rc<TaskBoardController>) {
    ui::TaskBoardAdapter::get(view_handle)
        .set_tasks(Rc::new(MapModel::new(controller.display_model(), map_task_to_item)).into());

    ui::TaskBoardAdapter::get(view_handle).on_complete_all({
        let controller = controller.clone();

        move || {
            controller.complete_all();
        }
    });

    ui::TaskBoardAdapter::get(view_handle).on_toggle_task({
        move |task_id| {
            // a negative id can't name a task, same as any other unknown id
            if let Ok(task_id) = u32::try_from(task_id) {
                controller.toggle_completion(TaskId(task_id));
            }
        }
    });
}

// maps a TaskModel (data) to a TaskRowItem (ui)
fn map_task_to_item(task: TaskModel) -> ui::TaskRowItem {
    ui::TaskRowItem {
        // -1 never names a task, so an id past i32::MAX can't toggle another one
        task_id: i32::try_from(task.id.0).unwrap_or(-1),
        title: task.title.into(),
        date: task.date_label.into(),
        accent: color_for_tag(task.color_tag),
        completed: task.completed,
    }
}
