mod plotter;

pub use plotter::{PlotterError, TracePlotter, OUTPUT_PATH};
