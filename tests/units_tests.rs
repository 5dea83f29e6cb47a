// Byte formatting tests (binary prefixes, two decimals)

use usage_analyzer::units::memory_units;

#[test]
fn test_values_below_one_kib_stay_in_bytes() {
    assert_eq!(memory_units(0.0), "0.00B");
    assert_eq!(memory_units(1.0), "1.00B");
    assert_eq!(memory_units(1023.0), "1023.00B");
}

#[test]
fn test_exact_power_of_1024_boundaries() {
    assert_eq!(memory_units(1024.0), "1.00KiB");
    assert_eq!(memory_units(1024.0 * 1024.0), "1.00MiB");
    assert_eq!(memory_units(1024.0 * 1024.0 * 1024.0), "1.00GiB");
}

#[test]
fn test_fractional_scaling_rounds_to_two_decimals() {
    assert_eq!(memory_units(1536.0), "1.50KiB");
    assert_eq!(memory_units(2.5 * 1024.0 * 1024.0), "2.50MiB");
}

#[test]
fn test_unit_selection_is_monotonic() {
    // Each boundary strictly increases the unit index.
    let samples = [512.0, 2048.0, 3.0 * 1024.0 * 1024.0, 5.0 * 1024f64.powi(3)];
    let units = ["B", "KiB", "MiB", "GiB"];
    for (value, unit) in samples.iter().zip(units.iter()) {
        assert!(
            memory_units(*value).ends_with(unit),
            "{} should format in {}",
            value,
            unit
        );
    }
}

#[test]
fn test_negative_values_keep_sign() {
    assert_eq!(memory_units(-2048.0), "-2.00KiB");
    assert_eq!(memory_units(-512.0), "-512.00B");
}

#[test]
fn test_largest_unit_is_a_hard_cap() {
    // Past EiB the value keeps growing instead of running off the unit table.
    assert_eq!(memory_units(1024f64.powi(8)), "1024.00EiB");
}
