use serde::Deserialize;

/// Appearance of the rendered buffer chart. The output location and the
/// chart wording are not configurable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    /// Image width, in pixels.
    /// Default: 640
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height, in pixels.
    /// Default: 480
    #[serde(default = "default_height")]
    pub height: u32,

    /// Blank space around the plotting area, in pixels.
    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Room reserved for tick labels and axis descriptions, in pixels.
    #[serde(default = "default_label_area")]
    pub label_area: u32,

    /// Font size of the chart title.
    #[serde(default = "default_title_font_size")]
    pub title_font_size: u32,

    /// Font size of the axis descriptions.
    #[serde(default = "default_label_font_size")]
    pub label_font_size: u32,

    /// Stroke width of the trace line, in pixels.
    #[serde(default = "default_line_width")]
    pub line_width: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            label_area: default_label_area(),
            title_font_size: default_title_font_size(),
            label_font_size: default_label_font_size(),
            line_width: default_line_width(),
        }
    }
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_margin() -> u32 {
    10
}

fn default_label_area() -> u32 {
    50
}

fn default_title_font_size() -> u32 {
    20
}

fn default_label_font_size() -> u32 {
    15
}

fn default_line_width() -> u32 {
    1
}
