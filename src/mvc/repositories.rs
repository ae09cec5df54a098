// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod in_memory_task_repository;
pub use in_memory_task_repository::*;

mod task_seed;
pub use task_seed::*;

use crate::mvc::ColorTag;

pub mod traits;

pub fn default_seed() -> Vec<TaskSeed> {
    let titles = [
        (ColorTag::NoteTab, "Mobile App Research"),
        (ColorTag::NoteTab2, "Prepare Wireframe for Main Flow"),
        (ColorTag::NoteTab3, "Prepare Screens"),
    ];

    [true, false]
        .into_iter()
        .flat_map(|completed| {
            titles.iter().map(move |(color_tag, title)| TaskSeed {
                color_tag: *color_tag,
                title: (*title).into(),
                date_label: "4 Oct".into(),
                completed,
            })
        })
        .collect()
}

pub fn task_repo(seed: Vec<TaskSeed>) -> impl traits::TaskRepository + Clone {
    InMemoryTaskRepository::new(seed)
}
