// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::{Model, ModelNotify, ModelTracker};

use super::{TaskBoardModel, TaskModel};

/// Rows of the board in display order.
///
/// The order moves whenever a task changes group, so every change resets the view.
#[derive(Clone)]
pub struct DisplayOrderModel {
    board: TaskBoardModel,
    notify: Rc<ModelNotify>,
}

impl DisplayOrderModel {
    pub fn new(board: TaskBoardModel) -> Self {
        Self { board, notify: Rc::new(Default::default()) }
    }

    pub fn reset(&self) {
        self.notify.reset()
    }
}

impl Model for DisplayOrderModel {
    type Data = TaskModel;

    fn row_count(&self) -> usize {
        self.board.total_count()
    }

    // rebuilds the whole order per row, quadratic per refresh but boards stay small
    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.board.display_order().into_iter().nth(row)
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}
