use ratatui::style::Color;

use crate::store::Severity;

pub const PRIMARY: Color = Color::from_u32(0x00f7d44b);
pub const SECONDARY: Color = Color::from_u32(0x009D8400);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x00feca88);
pub const SUCCESS: Color = Color::from_u32(0x0059c36a);
pub const ERROR: Color = Color::from_u32(0x00e5534b);

pub fn severity(severity: Severity) -> Color {
    match severity {
        Severity::Success => SUCCESS,
        Severity::Error => ERROR,
        Severity::Info => ACCENT,
    }
}
