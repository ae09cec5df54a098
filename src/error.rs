// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::mvc::SeedError;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("Platform error: {0}")]
    Platform(#[from] slint::PlatformError),
}
