/// Output formatting for the extracted array.
use std::io::{self, Write};

/// Label printed in front of the rendered array. The array is printed in input
/// order; nothing is sorted.
pub const LABEL: &str = "Sorted array : ";

/// Render `values` as `[a, b, c]`.
pub fn render_array(values: &[i32]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Render the full output line (without trailing newline).
pub fn render_line(values: &[i32]) -> String {
    format!("{}{}", LABEL, render_array(values))
}

/// Write the output line plus a newline to `out`.
pub fn write_line<W: Write>(mut out: W, values: &[i32]) -> io::Result<()> {
    writeln!(out, "{}", render_line(values))?;
    out.flush()
}
