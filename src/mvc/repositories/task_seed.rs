// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mvc::ColorTag;

/// A task as it appears in a seed file, before it gets an id.
///
/// ```json
/// [{ "color": "noteTabColor", "title": "Prepare Screens", "date": "4 Oct", "completed": true }]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TaskSeed {
    #[serde(rename = "color", default)]
    pub color_tag: ColorTag,
    pub title: String,
    #[serde(rename = "date", default)]
    pub date_label: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SeedError {
    #[error("Cannot read task file {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("Cannot parse task file {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
}

pub fn parse_seed(path: &Path, json: &str) -> Result<Vec<TaskSeed>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError::Parse { path: path.into(), source })
}

pub fn load_seed_file(path: &Path) -> Result<Vec<TaskSeed>, SeedError> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| SeedError::Read { path: path.into(), source })?;

    parse_seed(path, &json)
}
