// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use clap::Parser;
use slint::ComponentHandle;

pub mod config;
mod error;
pub mod mvc;
pub mod ui;

pub use error::Error;
use ui::task_board_adapter;

pub fn main() -> Result<(), Error> {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let cli = config::Cli::parse();
    let main_window = init(cli.load_seed()?)?;

    main_window.run()?;
    Ok(())
}

/// Creates the board window for the given tasks. The window is not shown yet.
pub fn init(seed: Vec<mvc::TaskSeed>) -> Result<ui::MainWindow, slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    let task_board_controller = mvc::TaskBoardController::new(
        mvc::task_repo(seed),
        task_board_adapter::create_controller_callbacks(&view_handle),
    );
    task_board_adapter::initialize_adapter(&view_handle, task_board_controller);

    Ok(view_handle)
}
