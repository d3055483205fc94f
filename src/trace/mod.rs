mod data;
mod stats;
mod txtfile;

pub use data::BufferTrace;
pub use stats::{format_minimum, minimum, StatsError};
pub use txtfile::TraceError;
