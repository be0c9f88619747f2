// UI constants for the card layout, kept apart from the drawing code.

/// Window title
pub const WINDOW_TITLE: &str = "Valentine";

/// Default window size in logical pixels
pub const WINDOW_SIZE: [f32; 2] = [480.0, 600.0];

/// Maximum width of the white card (28rem)
pub const CARD_MAX_WIDTH: f32 = 448.0;

/// Margin kept between the card and the window edge
pub const CARD_OUTER_MARGIN: f32 = 16.0;

/// UI spacing constants
pub mod spacing {
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 16.0;
    pub const XLARGE: f32 = 24.0;
    pub const XXLARGE: f32 = 32.0;
    /// Space between the question and the buttons row
    pub const BUTTONS_TOP: f32 = 48.0;
}

/// Card frame constants
pub mod card {
    /// Inner margin of the card frame (symmetric)
    pub const INNER_MARGIN: f32 = 32.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 16.0;
}

/// Button geometry before any style factor is applied
pub mod button {
    /// Width of the accept button at factor 1
    pub const BASE_WIDTH: f32 = 64.0;

    /// Height of both buttons at factor 1
    pub const BASE_HEIGHT: f32 = 36.0;

    /// Horizontal padding around the decline caption
    pub const PADDING_X: f32 = 20.0;

    /// Gap between the two buttons
    pub const GAP: f32 = 16.0;

    /// Caption size at scale 1
    pub const FONT_SIZE: f32 = 16.0;

    /// Growth of the accept button under the pointer
    pub const HOVER_SCALE: f32 = 1.05;

    /// Duration of size, color and position transitions, in seconds
    pub const TRANSITION_SECS: f32 = 0.3;
}

/// Glyph and text sizes
pub mod font {
    pub const HEADLINE_GLYPH: f32 = 48.0;
    pub const CELEBRATION_GLYPH: f32 = 60.0;
    pub const PARTY_GLYPH: f32 = 48.0;
    pub const QUESTION: f32 = 24.0;
    pub const CELEBRATION_TITLE: f32 = 30.0;
    pub const CELEBRATION_BODY: f32 = 18.0;
    pub const BANNER: f32 = 14.0;
    pub const SMALL_GLYPH: f32 = 24.0;
}

/// Colors taken from the card's pink/purple theme
pub mod palette {
    use eframe::egui::Color32;

    pub const PINK_100: Color32 = Color32::from_rgb(0xFC, 0xE7, 0xF3);
    pub const PURPLE_100: Color32 = Color32::from_rgb(0xF3, 0xE8, 0xFF);
    pub const PINK_600: Color32 = Color32::from_rgb(0xDB, 0x27, 0x77);
    pub const RED_500: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
    pub const BLUE_600: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
    pub const PURPLE_600: Color32 = Color32::from_rgb(0x93, 0x33, 0xEA);
    pub const GRAY_500: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);
    pub const GRAY_700: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
    pub const GRAY_800: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);
    pub const AMBER_400: Color32 = Color32::from_rgb(0xFB, 0xBF, 0x24);
    pub const BLUE_300: Color32 = Color32::from_rgb(0x93, 0xC5, 0xFD);
}
