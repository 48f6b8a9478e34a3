use std::io::{self, Write};

use crate::scalar::Scalar;

/// Writes one `key: count` line per entry. Text keys are quoted so a numeric
/// key and its text rendering stay distinguishable in the output.
pub fn write_table(output: &mut impl Write, entries: &[(Scalar, u64)]) -> io::Result<()> {
    for (key, count) in entries {
        writeln!(output, "{}: {count}", key.literal())?;
    }
    Ok(())
}
