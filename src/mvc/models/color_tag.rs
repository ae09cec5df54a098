// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use slint::Color;

/// Accent stripe of a task card.
///
/// The set of tab colors is closed. Names that don't match one of the tabs
/// end up as [`ColorTag::Plain`], which renders with the fallback color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ColorTag {
    NoteTab,
    NoteTab2,
    NoteTab3,
    #[default]
    Plain,
}

impl ColorTag {
    pub const TABS: [ColorTag; 3] = [ColorTag::NoteTab, ColorTag::NoteTab2, ColorTag::NoteTab3];

    pub fn from_name(name: &str) -> Self {
        match name {
            "noteTabColor" => Self::NoteTab,
            "noteTabColor2" => Self::NoteTab2,
            "noteTabColor3" => Self::NoteTab3,
            _ => Self::Plain,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NoteTab => "noteTabColor",
            Self::NoteTab2 => "noteTabColor2",
            Self::NoteTab3 => "noteTabColor3",
            Self::Plain => "plain",
        }
    }
}

impl From<String> for ColorTag {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Color of the card background, also used for tags outside the tab set.
pub fn fallback_color() -> Color {
    Color::from_rgb_u8(24, 24, 24)
}

pub fn color_for_tag(tag: ColorTag) -> Color {
    match tag {
        ColorTag::NoteTab => Color::from_rgb_u8(250, 203, 186),
        ColorTag::NoteTab2 => Color::from_rgb_u8(215, 240, 255),
        ColorTag::NoteTab3 => Color::from_rgb_u8(250, 217, 255),
        ColorTag::Plain => fallback_color(),
    }
}

pub fn color_for_tag_name(name: &str) -> Color {
    color_for_tag(ColorTag::from_name(name))
}
