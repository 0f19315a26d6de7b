//! ANSI escape sequences used to style console lines.

pub const ANSI_RESET: &str = "\u{1b}[0m";

// Text colours
pub const ANSI_BLACK: &str = "\u{1b}[30m";
pub const ANSI_RED: &str = "\u{1b}[31m";
pub const ANSI_GREEN: &str = "\u{1b}[32m";
pub const ANSI_YELLOW: &str = "\u{1b}[33m";
pub const ANSI_BLUE: &str = "\u{1b}[34m";
pub const ANSI_PURPLE: &str = "\u{1b}[35m";
pub const ANSI_CYAN: &str = "\u{1b}[36m";
pub const ANSI_WHITE: &str = "\u{1b}[37m";

// Background colours
pub const ANSI_BLACK_BACKGROUND: &str = "\u{1b}[40m";
pub const ANSI_RED_BACKGROUND: &str = "\u{1b}[41m";
pub const ANSI_GREEN_BACKGROUND: &str = "\u{1b}[42m";
pub const ANSI_YELLOW_BACKGROUND: &str = "\u{1b}[43m";
pub const ANSI_BLUE_BACKGROUND: &str = "\u{1b}[44m";
pub const ANSI_PURPLE_BACKGROUND: &str = "\u{1b}[45m";
pub const ANSI_CYAN_BACKGROUND: &str = "\u{1b}[46m";
pub const ANSI_WHITE_BACKGROUND: &str = "\u{1b}[47m";

/// Returns true if `line` contains any escape sequence.
pub fn has_escape(line: &str) -> bool {
    line.contains('\u{1b}')
}
