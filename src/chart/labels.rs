/// Wording drawn on a buffer chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
}

impl ChartLabels {
    /// Labels for the wired-link capture over 3M packets.
    pub const fn wired_trace() -> Self {
        ChartLabels {
            title: "Buffer over 3M packets, wired",
            x_axis: "Packet number",
            y_axis: "Buffer value (ms)",
        }
    }
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self::wired_trace()
    }
}
