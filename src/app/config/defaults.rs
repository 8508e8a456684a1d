// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Default curriculum year preselected on the student browse screen.
pub const DEFAULT_BROWSE_YEAR: u8 = 2;

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub(super) fn default_browse_year() -> Option<u8> {
    Some(DEFAULT_BROWSE_YEAR)
}
