mod bounds;
mod labels;

pub use bounds::AxisBounds;
pub use labels::ChartLabels;

use crate::config::ChartConfig;
use crate::trace::BufferTrace;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TRACE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("output directory {0} does not exist")]
    MissingDirectory(PathBuf),
    #[error("unable to draw chart: {0}")]
    Drawing(String),
}

fn drawing_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> ChartError {
    ChartError::Drawing(e.to_string())
}

/// Draw `trace` as a line against packet number and save it as a PNG at
/// `path`, replacing whatever was there. Non-finite samples are left out
/// of the line and samples past the drawable range sit on the chart edge.
pub fn render_trace(
    trace: &BufferTrace,
    labels: &ChartLabels,
    config: &ChartConfig,
    path: &Path,
) -> Result<(), ChartError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            return Err(ChartError::MissingDirectory(dir.to_path_buf()));
        }
    }

    let bounds = AxisBounds::for_trace(trace);
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", config.title_font_size))
        .margin(config.margin)
        .x_label_area_size(config.label_area)
        .y_label_area_size(config.label_area)
        .build_cartesian_2d(bounds.x.clone(), bounds.y.clone())
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .x_desc(labels.x_axis)
        .y_desc(labels.y_axis)
        .axis_desc_style(("sans-serif", config.label_font_size))
        .draw()
        .map_err(drawing_error)?;

    chart
        .draw_series(LineSeries::new(
            trace
                .points()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| (i as f64, bounds.clamp_y(v))),
            TRACE_COLOR.stroke_width(config.line_width),
        ))
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    log::info!("saved buffer chart to {}", path.display());
    Ok(())
}

/// Whether plotters can find the font used for the chart wording. Drawing
/// text fails on hosts without any system sans-serif font.
#[cfg(test)]
pub(crate) fn text_font_available() -> bool {
    ("sans-serif", 12).into_font().box_size("0").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn render_to_scratch(samples: Vec<f64>) -> Option<Vec<u8>> {
        if !text_font_available() {
            eprintln!("skipping: no sans-serif font on this host");
            return None;
        }
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("buffer.png");
        std::fs::write(&path, b"stale").expect("seed");
        render_trace(
            &BufferTrace::from_samples(samples),
            &ChartLabels::wired_trace(),
            &ChartConfig::default(),
            &path,
        )
        .expect("render");
        Some(std::fs::read(&path).expect("read back"))
    }

    #[test]
    fn it_errors_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("figures").join("buffer.png");
        let trace = BufferTrace::from_samples(vec![3.0, 1.0, 2.0]);
        let res = render_trace(
            &trace,
            &ChartLabels::wired_trace(),
            &ChartConfig::default(),
            &path,
        );
        assert!(matches!(res, Err(ChartError::MissingDirectory(_))));
        assert!(!path.exists());
    }

    #[test]
    fn it_renders_png() {
        if let Some(png) = render_to_scratch(vec![3.0, 1.0, 2.0]) {
            assert_eq!(&png[..8], PNG_MAGIC);
        }
    }

    #[test]
    fn it_renders_opposite_extremes() {
        if let Some(png) = render_to_scratch(vec![-1e308, 1e308]) {
            assert_eq!(&png[..8], PNG_MAGIC);
        }
    }

    #[test]
    fn it_renders_single_sample() {
        if let Some(png) = render_to_scratch(vec![5.5]) {
            assert_eq!(&png[..8], PNG_MAGIC);
        }
    }

    #[test]
    fn wired_labels() {
        let labels = ChartLabels::default();
        assert_eq!(labels.title, "Buffer over 3M packets, wired");
        assert_eq!(labels.x_axis, "Packet number");
        assert_eq!(labels.y_axis, "Buffer value (ms)");
    }
}
