// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod color_tag;
pub use color_tag::*;

mod task_model;
pub use task_model::{TaskId, TaskModel};

mod task_board_model;
pub use task_board_model::{TaskBoardModel, TaskSummary};

mod display_order_model;
pub use display_order_model::DisplayOrderModel;
