use num_traits::Float;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("minimum of an empty trace is undefined")]
    EmptyTrace,
}

/// Smallest sample in the sequence. NaN samples never win against a real
/// number; a sequence made only of NaNs yields NaN.
pub fn minimum<T: Float, I: IntoIterator<Item = T>>(samples: I) -> Result<T, StatsError> {
    samples
        .into_iter()
        .fold(None, |acc: Option<T>, x| Some(acc.map_or(x, |m| m.min(x))))
        .ok_or(StatsError::EmptyTrace)
}

/// The console report line, without the trailing newline.
///
/// Uses the shortest round-trip representation, which keeps a fractional
/// part on whole numbers (`1.0`, not `1`).
pub fn format_minimum<T: Float + Debug>(value: T) -> String {
    format!("minimum buffer: {value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        assert_eq!(minimum(vec![3.0, 1.0, 2.0]).unwrap(), 1.0);
    }

    #[test]
    fn order_does_not_matter() {
        let samples = [4.25_f64, -3.0, 17.5, 0.0, -2.75, 9.0];
        let expected = minimum(samples).unwrap();
        let mut rotated = samples;
        for _ in 0..samples.len() {
            rotated.rotate_left(1);
            assert_eq!(minimum(rotated).unwrap(), expected);
        }
        let mut reversed = samples;
        reversed.reverse();
        assert_eq!(minimum(reversed).unwrap(), -3.0);
    }

    #[test]
    fn it_errors_empty() {
        assert!(matches!(
            minimum(Vec::<f64>::new()),
            Err(StatsError::EmptyTrace)
        ));
    }

    #[test]
    fn nan_is_skipped() {
        assert_eq!(minimum([f64::NAN, 2.0, 1.5]).unwrap(), 1.5);
        assert!(minimum([f64::NAN]).unwrap().is_nan());
    }

    #[test]
    fn single_sample() {
        assert_eq!(minimum([5.5_f32]).unwrap(), 5.5);
    }

    #[test]
    fn report_format() {
        assert_eq!(format_minimum(1.0_f64), "minimum buffer: 1.0");
        assert_eq!(format_minimum(5.5_f64), "minimum buffer: 5.5");
        assert_eq!(format_minimum(-0.125_f64), "minimum buffer: -0.125");
    }
}
