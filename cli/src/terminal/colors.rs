use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 94, g: 200, b: 240 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

pub const HOST: Color = Color::TrueColor { r: 120, g: 160, b: 255 };
pub const STATE_RUNNING: Color = Color::Green;
pub const STATE_STOPPED: Color = Color::Yellow;
pub const STATE_OTHER: Color = Color::Red;
