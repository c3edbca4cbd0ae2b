//! Result file writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Write `values` to `path`, one per line.
pub fn write_result(path: &Path, values: &[f64]) -> CliResult<()> {
    let wrap = |source| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    write_values(&mut out, values).map_err(wrap)?;
    out.flush().map_err(wrap)
}

/// Format `values` one per line. Values round-trip through `str::parse`.
pub fn write_values(out: &mut impl Write, values: &[f64]) -> io::Result<()> {
    for v in values {
        writeln!(out, "{v}")?;
    }
    Ok(())
}

/// Format `x` with six significant digits the way C's `%g` does.
///
/// Scientific notation is used when the decimal exponent is below -4 or
/// at least 6. Trailing zeros and a trailing decimal point are dropped.
pub fn format_general(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // The exponent after rounding to six digits picks the notation.
    let sci = format!("{x:.5e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{x:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
