use ratatui::style::Color;

// Brand colors (storefront blue with gold accent)
pub const BRAND_BLUE: Color = Color::Rgb(37, 99, 235); // #2563EB
pub const BRAND_LIGHT_BLUE: Color = Color::Rgb(147, 197, 253); // #93C5FD
pub const BRAND_GOLD: Color = Color::Rgb(234, 179, 8); // #EAB308

// UI colors
pub const PRICE_ORANGE: Color = Color::Rgb(234, 88, 12); // #EA580C
pub const WEEKEND_ORANGE: Color = Color::Rgb(249, 115, 22); // #F97316
pub const RANK_RED: Color = Color::Rgb(239, 68, 68); // TOP1 badge
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136); // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
pub const PAST_GRAY: Color = Color::Rgb(75, 75, 75); // unselectable days
