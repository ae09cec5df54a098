// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::ColorTag;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

#[derive(Clone, Default, Debug, PartialEq)]
pub struct TaskModel {
    pub id: TaskId,
    pub color_tag: ColorTag,
    pub title: String,

    // display text only, never parsed
    pub date_label: String,
    pub completed: bool,
}
