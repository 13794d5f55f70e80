use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub error: Color,     // Red
    pub curve: Color,     // The fractal path itself
    pub overlay: Color,   // Name/level text drawn over the canvas
    pub border: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    error: Color::Rgb(243, 139, 168),
    curve: Color::Rgb(137, 180, 250),   // Blue, as the original drew it
    overlay: Color::Rgb(166, 227, 161), // Green, as the original drew it
    border: Color::Rgb(108, 112, 134),  // Grey
};
