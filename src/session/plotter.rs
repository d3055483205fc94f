use crate::chart::{render_trace, ChartError, ChartLabels};
use crate::config::ChartConfig;
use crate::trace::{format_minimum, BufferTrace, StatsError, TraceError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the buffer chart is always written.
pub const OUTPUT_PATH: &str = "/home/jchen18/audio/figures/buffer3M_wired.png";

#[derive(Error, Debug)]
pub enum PlotterError {
    #[error("can't load buffer trace")]
    Trace(#[from] TraceError),
    #[error("can't compute minimum buffer")]
    Minimum(#[from] StatsError),
    #[error("can't report minimum buffer")]
    Report(#[source] io::Error),
    #[error("can't save buffer chart")]
    Chart(#[from] ChartError),
}

/// Reads one trace file, reports its minimum and charts it.
pub struct TracePlotter<'a> {
    input: PathBuf,
    output: PathBuf,
    labels: ChartLabels,
    chart: &'a ChartConfig,
}

impl<'a> TracePlotter<'a> {
    pub fn new(input: &Path, output: &Path, chart: &'a ChartConfig) -> Self {
        TracePlotter {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            labels: ChartLabels::wired_trace(),
            chart,
        }
    }

    /// Run the whole pipeline once, writing the minimum line to `report`.
    ///
    /// Steps run strictly in order and the first failure stops everything:
    /// nothing is reported or drawn for a trace that fails to load or is
    /// empty, while a failure to save the chart happens after the minimum
    /// has already been reported.
    pub fn run<W: Write>(&self, report: &mut W) -> Result<f64, PlotterError> {
        let trace = BufferTrace::from_path(&self.input)?;
        log::info!(
            "loaded {} buffer samples from {}",
            trace.len(),
            self.input.display()
        );

        let min = trace.minimum()?;
        log::debug!("minimum buffer is {min}");
        writeln!(report, "{}", format_minimum(min))
            .and_then(|_| report.flush())
            .map_err(PlotterError::Report)?;

        render_trace(&trace, &self.labels, self.chart, &self.output)?;
        Ok(min)
    }
}
