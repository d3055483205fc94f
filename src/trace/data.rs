use super::stats::{minimum, StatsError};
use super::txtfile::{read_trace, TraceError};
use ndarray::Array1;
use std::{
    fs::File,
    io::{self, BufRead},
    path::Path,
};

/// An ordered sequence of buffer samples, in milliseconds. Sample `i` came
/// from line `i + 1` of the input and is plotted at packet number `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferTrace {
    samples: Array1<f64>,
}

impl BufferTrace {
    pub fn from_samples(samples: Vec<f64>) -> BufferTrace {
        BufferTrace {
            samples: Array1::from_vec(samples),
        }
    }

    /// Load a whole trace file into memory. The file handle is released
    /// before this returns, on success or failure.
    pub fn from_path(path: &Path) -> Result<BufferTrace, TraceError> {
        let f = File::open(path).map_err(TraceError::FileOpenFailed)?;
        Self::from_reader(io::BufReader::new(f))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<BufferTrace, TraceError> {
        let samples = read_trace(reader)?;
        Ok(BufferTrace::from_samples(samples))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &Array1<f64> {
        &self.samples
    }

    /// (packet number, sample) pairs in file order.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.samples.iter().copied().enumerate()
    }

    pub fn minimum(&self) -> Result<f64, StatsError> {
        minimum(self.samples.iter().copied())
    }
}
