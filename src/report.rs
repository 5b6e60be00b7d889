//! Plain-text rendering of analysis results

use std::io::{self, Write};

use crate::model::{AdviceList, Severity};

/// Render each advice as `severity: message`, one per line.
///
/// Debug-severity advice is hidden unless `verbose` is set.
pub fn render_advice_list<W: Write>(
    out: &mut W,
    advice_list: &AdviceList,
    verbose: bool,
) -> io::Result<()> {
    for advice in advice_list.iter() {
        if advice.severity < Severity::Info && !verbose {
            continue;
        }
        writeln!(out, "{}: {}", advice.severity, advice.message)?;
    }
    Ok(())
}
