use std::fmt::Display;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 12;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Pads `text` with `fill` on both sides up to [`TOTAL_WIDTH`] display columns.
fn centered(text: &str, fill: &str) -> (String, String) {
    let free: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(text));
    let left: usize = free / 2;
    (fill.repeat(left), fill.repeat(free - left))
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ CATISLAND v{} ⟧", env!("CARGO_PKG_VERSION"));
    let (left, right) = centered(&title, "═");
    print(&format!("{}{}{}", left.bright_black(), title.bright_green().bold(), right.bright_black()));
}

pub fn header_line(msg: &str) -> String {
    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let (left, right) = centered(&title, "─");
    format!("{}{}{}", left.bright_black(), title.bright_green(), right.bright_black())
}

pub fn header(msg: &str, q_level: u8) {
    if q_level == 0 {
        print(&header_line(msg));
    }
}

pub fn fat_separator() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
}

/// `> key.......: value`, keys padded to a common width.
pub fn aligned_line(key: &str, value: impl Display) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn no_results() {
    let msg: &str = "no applications reported";
    let (left, _) = centered(msg, " ");
    print(&format!("{}{}", left, msg.red().bold()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_spans_total_width() {
        colored::control::set_override(false);
        let line = header_line("applications");

        assert!(line.contains("⟦ APPLICATIONS ⟧"));
        assert_eq!(console::measure_text_width(&line), TOTAL_WIDTH);
    }

    #[test]
    fn centered_splits_odd_padding_to_the_right() {
        let (left, right) = centered(&"x".repeat(TOTAL_WIDTH - 3), "-");
        assert_eq!((left.len(), right.len()), (1, 2));
    }
}
