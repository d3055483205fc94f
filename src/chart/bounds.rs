use crate::trace::BufferTrace;
use std::ops::Range;

// Fraction of the sample spread added above and below the trace.
const Y_PADDING: f64 = 0.05;

// Largest magnitude either end of the y axis may take. plotters' tick
// placement subtracts and rounds around the axis ends, so the span between
// them has to stay well clear of f64::MAX.
const Y_LIMIT: f64 = f64::MAX / 8.0;

/// Plotting ranges for a trace. Both ranges are always non-empty and
/// finite so that single-sample, flat and extreme traces still get a
/// drawable coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl AxisBounds {
    pub fn for_trace(trace: &BufferTrace) -> AxisBounds {
        let last = trace.len().saturating_sub(1) as f64;
        let x = 0.0..last.max(1.0);

        let (lo, hi) = trace
            .samples()
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));
        // Scaled before subtracting so opposite extremes can't overflow.
        let pad = if hi > lo {
            hi * Y_PADDING - lo * Y_PADDING
        } else {
            (lo.abs() * Y_PADDING).max(0.5)
        };
        let start = (lo - pad).clamp(-Y_LIMIT, Y_LIMIT);
        let end = (hi + pad).clamp(-Y_LIMIT, Y_LIMIT);
        let y = if start < end {
            start..end
        } else if start > 0.0 {
            (Y_LIMIT / 2.0)..Y_LIMIT
        } else {
            -Y_LIMIT..(-Y_LIMIT / 2.0)
        };
        AxisBounds { x, y }
    }

    /// Pin a sample onto the y axis. Only samples beyond the drawable
    /// limit are moved.
    pub fn clamp_y(&self, v: f64) -> f64 {
        v.clamp(self.y.start, self.y.end)
    }
}
