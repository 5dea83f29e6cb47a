// Text summary printed to standard output. CPU values keep their raw f64
// display (no rounding here); memory values go through memory_units so the
// summary and the chart ticks always agree.

use crate::models::SeriesSummary;
use crate::units::memory_units;
use std::io::Write;

pub fn write_summary<W: Write>(
    out: &mut W,
    cpu: &SeriesSummary<f64>,
    memory: &SeriesSummary<u64>,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "CPU")?;
    writeln!(out, "Min. CPU Percent: {}%", cpu.min)?;
    writeln!(out, "Max. CPU Percent: {}%", cpu.max)?;
    writeln!(out)?;
    writeln!(out, "Memory")?;
    writeln!(out, "Min. Memory: {}", memory_units(memory.min as f64))?;
    writeln!(out, "Max. Memory: {}", memory_units(memory.max as f64))?;
    Ok(())
}
