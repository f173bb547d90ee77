use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, trace};

use crate::classify::classify;

/// First number written
pub(crate) const FIRST: u32 = 1;
/// Last number written (inclusive)
pub(crate) const LAST: u32 = 100;

/// Write one classification per line for every number from `FIRST` to `LAST`
///
/// Stops at the first failed write and returns that error; nothing is retried.
pub fn write_sequence<W: Write>(out: &mut W) -> Result<()> {
    debug!("Writing {}..={}", FIRST, LAST);
    for n in FIRST..=LAST {
        let label = classify(n);
        trace!("{} -> {}", n, label);
        writeln!(out, "{}", label)
            .with_context(|| format!("Unable to write line {} ({})", n, label))?;
    }
    out.flush().context("Unable to flush output")?;
    debug!("Wrote {} lines", LAST - FIRST + 1);
    Ok(())
}
