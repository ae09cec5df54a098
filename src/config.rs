// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;

use crate::mvc::{self, SeedError, TaskSeed};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the tasks to show instead of the built-in list
    #[arg(long, value_name = "FILE", action)]
    pub tasks: Option<PathBuf>,
}

impl Cli {
    pub fn load_seed(&self) -> Result<Vec<TaskSeed>, SeedError> {
        match &self.tasks {
            Some(path) => {
                let seed = mvc::load_seed_file(path)?;
                log::info!("Loaded {} tasks from {}", seed.len(), path.display());
                Ok(seed)
            }
            None => {
                let seed = mvc::default_seed();
                log::info!("Using the built-in list of {} tasks", seed.len());
                Ok(seed)
            }
        }
    }
}
