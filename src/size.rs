//! Human-readable byte sizes for the preview row.
//!
//! Sizes use 1024-based units up to terabytes. Rounding is decimal
//! fixed-point (ties go up), computed on the exact integer ratio so that
//! `1.125 KB` at two places reads `1.13 KB` rather than whatever the nearest
//! binary float happens to round to. The rounded text is then normalized
//! through `f64` so trailing zeros disappear (`1.50` → `1.5`).

#[cfg(test)]
#[path = "size_test.rs"]
mod size_test;

use crate::consts::{EXACT_DECIMALS, LAST_UNIT, UNITS, ZERO_BYTES};

/// Format `bytes` with the largest fitting unit and at most `decimals` places.
///
/// Negative precision is treated as zero. Counts of 1024 TB and above stay in
/// TB. The result always ends in one of [`UNITS`].
#[must_use]
pub fn format_bytes(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return ZERO_BYTES.to_string();
    }

    let index = unit_index(bytes);
    let precision = decimals.max(0).unsigned_abs();
    let value = if precision >= EXACT_DECIMALS {
        scaled_value(bytes, index)
    } else {
        round_fixed(bytes, 10 * index, precision)
    };
    format!("{value} {}", UNITS[index])
}

/// Index into [`UNITS`] for a non-zero byte count.
#[must_use]
pub fn unit_index(bytes: u64) -> usize {
    if bytes == 0 {
        return 0;
    }
    (bytes.ilog(1024) as usize).min(LAST_UNIT)
}

/// Convert a browser-reported size to a byte count.
///
/// Negative, NaN, and infinite inputs become 0; fractions are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn size_from_f64(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 { size as u64 } else { 0 }
}

#[allow(clippy::cast_precision_loss)]
fn scaled_value(bytes: u64, index: usize) -> f64 {
    bytes as f64 / (1u64 << (10 * index)) as f64
}

/// `bytes / 2^shift` rounded half-up to `precision` decimal places.
#[allow(clippy::cast_precision_loss)]
fn round_fixed(bytes: u64, shift: usize, precision: u32) -> f64 {
    let scale = 10u128.pow(precision);
    let scaled = u128::from(bytes) * scale;
    let divisor = 1u128 << shift;

    let mut units = scaled >> shift;
    let remainder = scaled & (divisor - 1);
    if remainder != 0 && remainder * 2 >= divisor {
        units += 1;
    }

    let whole = units / scale;
    let text = if precision == 0 {
        whole.to_string()
    } else {
        let fraction = units % scale;
        format!("{whole}.{fraction:0width$}", width = precision as usize)
    };
    text.parse::<f64>().unwrap_or_else(|_| units as f64 / scale as f64)
}
