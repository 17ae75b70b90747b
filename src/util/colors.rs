use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00f7d44b);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const MUTED: Color = Color::from_u32(0x008a8a8a);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const SURFACE: Color = Color::from_u32(0x001c1c1c);
pub const ERROR: Color = Color::from_u32(0x00ef4444);
