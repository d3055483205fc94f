use std::io::BufRead;
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("unable to open trace file")]
    FileOpenFailed(#[source] std::io::Error),
    #[error("bad line read")]
    BadLineRead(#[source] std::io::Error),
    #[error("unparseable float on line {line}")]
    UnparsableFloat {
        line: usize,
        #[source]
        source: ParseFloatError,
    },
}

// Line endings are already gone by the time we get here; stray blanks
// around the number are tolerated.
fn handle_line(lineno: usize, line: &str) -> Result<f64, TraceError> {
    line.trim()
        .parse::<f64>()
        .map_err(|source| TraceError::UnparsableFloat {
            line: lineno,
            source,
        })
}

pub(super) fn read_trace<R: BufRead>(reader: R) -> Result<Vec<f64>, TraceError> {
    let samples = reader
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line.map_err(TraceError::BadLineRead)?;
            handle_line(i + 1, &line)
        })
        .collect::<Result<Vec<f64>, TraceError>>()?;
    log::debug!("parsed {} buffer samples", samples.len());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let samples = read_trace("3.0\n1.0\n2.0\n".as_bytes()).expect("parse");
        assert_eq!(samples, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn crlf_and_exponents_ok() {
        let samples = read_trace("-1.5e2\r\n+4\r\n.25".as_bytes()).expect("parse");
        assert_eq!(samples, vec![-150.0, 4.0, 0.25]);
    }

    #[test]
    fn spaces_ok() {
        let samples = read_trace("  12.0 \n\t3\n".as_bytes()).expect("parse");
        assert_eq!(samples, vec![12.0, 3.0]);
    }

    #[test]
    fn empty_input_is_empty() {
        let samples = read_trace("".as_bytes()).expect("parse");
        assert!(samples.is_empty());
    }

    #[test]
    fn it_errors_garbage() {
        let res = read_trace("1.0\nabc\n3.0\n".as_bytes());
        assert!(matches!(res, Err(TraceError::UnparsableFloat { line: 2, .. })));
    }

    #[test]
    fn it_errors_blank_line() {
        let res = read_trace("1.0\n\n3.0\n".as_bytes());
        assert!(matches!(res, Err(TraceError::UnparsableFloat { line: 2, .. })));
    }
}
