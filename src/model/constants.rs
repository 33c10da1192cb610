//! Module defining the brand palette shared by the generators.

use super::color::Color;


/// Page background of dark slides and the cover (Tailwind slate-900).
pub const DARK_BG: Color = Color(15, 23, 42);
/// Page background of light slides (slate-50).
pub const LIGHT_BG: Color = Color(248, 250, 252);

pub const BLUE: Color = Color(59, 130, 246);
pub const PURPLE: Color = Color(139, 92, 246);
pub const EMERALD: Color = Color(16, 185, 129);
pub const AMBER: Color = Color(245, 158, 11);
pub const WHITE: Color = Color::white();

pub const SLATE_300: Color = Color(203, 213, 225);
pub const SLATE_400: Color = Color(148, 163, 184);
/// Body text on light slides.
pub const SLATE_600: Color = Color(71, 85, 105);
/// Grid lines on the cover.
pub const SLATE_800: Color = Color(30, 41, 59);

pub const INDIGO_400: Color = Color(129, 140, 248);
pub const SLATE_500: Color = Color(100, 116, 139);
