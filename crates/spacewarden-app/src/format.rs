//! Human-readable byte quantities for log output.

const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Render a byte count with a binary-prefixed unit, e.g. `1.5 GiB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn human_bytes(bytes: u64) -> String {
    scaled(bytes as f64, "")
}

/// Render a signed byte count; budgets can legitimately be negative.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn human_bytes_i64(bytes: i64) -> String {
    let sign = if bytes < 0 { "-" } else { "" };
    scaled(bytes.unsigned_abs() as f64, sign)
}

fn scaled(mut value: f64, sign: &str) -> String {
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{sign}{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{sign}{value:.1} ZiB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_quantities_stay_in_bytes() {
        assert_eq!(human_bytes(0), "0.0 B");
        assert_eq!(human_bytes(512), "512.0 B");
    }

    #[test]
    fn quantities_scale_through_binary_prefixes() {
        assert_eq!(human_bytes(1024), "1.0 KiB");
        assert_eq!(human_bytes(1536), "1.5 KiB");
        assert_eq!(human_bytes(3 * (1 << 30)), "3.0 GiB");
        assert_eq!(human_bytes(u64::MAX), "16.0 EiB");
    }

    #[test]
    fn signed_quantities_carry_the_sign() {
        assert_eq!(human_bytes_i64(-1024), "-1.0 KiB");
        assert_eq!(human_bytes_i64(2048), "2.0 KiB");
        assert_eq!(human_bytes_i64(i64::MIN), "-8.0 EiB");
    }
}
