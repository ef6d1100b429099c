//! Nordic Frost color theme definitions.
//!
//! The same Nord palette is exposed twice: as `ratatui` colors for the
//! profile table and as `crossterm` colors for plain console lines.

use crossterm::style::Color as ConsoleColor;
use ratatui::style::Color;

// === Nord Palette (table) ===

/// Medium polar night shade.
pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
/// Primary snow storm shade.
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);
/// Frost accent 2 - cyan (primary accent).
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);
/// Frost accent 4 - deep blue.
pub const NORD_FROST_4: Color = Color::Rgb(94, 129, 172);
/// Aurora green - success/connected.
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);
/// Aurora purple - special highlights.
pub const NORD_PURPLE: Color = Color::Rgb(180, 142, 173);

// === Semantic Table Colors ===

pub const TABLE_BORDER: Color = NORD_POLAR_NIGHT_3;
pub const TABLE_HEADER: Color = NORD_FROST_2;
pub const TABLE_NAME: Color = NORD_FROST_2;
pub const TABLE_HOST: Color = NORD_PURPLE;
pub const TABLE_USER: Color = NORD_GREEN;
pub const TABLE_TYPE: Color = NORD_FROST_4;
pub const TABLE_TEXT: Color = NORD_SNOW_STORM_1;

// === Semantic Console Colors ===

/// Aurora green.
pub const SUCCESS: ConsoleColor = ConsoleColor::Rgb {
    r: 163,
    g: 190,
    b: 140,
};
/// Aurora yellow.
pub const WARNING: ConsoleColor = ConsoleColor::Rgb {
    r: 235,
    g: 203,
    b: 139,
};
/// Aurora red.
pub const ERROR: ConsoleColor = ConsoleColor::Rgb {
    r: 191,
    g: 97,
    b: 106,
};
/// Frost cyan.
pub const ACCENT: ConsoleColor = ConsoleColor::Rgb {
    r: 136,
    g: 192,
    b: 208,
};
/// Polar night, for muted text.
pub const MUTED: ConsoleColor = ConsoleColor::Rgb {
    r: 76,
    g: 86,
    b: 106,
};
