mod chart;
mod root;

pub use chart::ChartConfig;
pub use root::{Config, ConfigurationError};
