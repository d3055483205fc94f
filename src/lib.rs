//! Buffer trace plotting: load a text file of per-packet buffer samples,
//! report the minimum buffer and chart the whole trace to a PNG image.
pub mod chart;
pub mod config;
pub mod session;
pub mod trace;
