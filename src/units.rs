// Binary-prefixed byte formatting, shared by the printed summary and the
// memory chart's y-axis tick labels. Both call sites must agree on rounding
// and unit selection, so this is the only place the rule lives.

const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Format a byte count with the largest 1024-based unit whose scaled value
/// is >= 1, two decimal digits, no space before the unit.
///
/// Values below 1024 stay in `B` (so `1023 -> "1023.00B"`), zero is
/// `"0.00B"`, and negative inputs keep their sign with the unit chosen on
/// the magnitude.
pub fn memory_units(bytes: f64) -> String {
    let sign = if bytes < 0.0 { "-" } else { "" };
    let mut value = bytes.abs();
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{}{:.2}{}", sign, value, UNITS[unit])
}
