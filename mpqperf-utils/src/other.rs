//! Module containing some utility functions that didn't fit anywhere else.

use time::{format_description, OffsetDateTime};

/// Produces a timestamp `String` of the current time in YYYY-MM-DD_HH-mm-SS format.
pub fn get_timestamp() -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(
            &format_description::parse("[year]-[month]-[day]_[hour]-[minute]-[second]").unwrap(),
        )
        .unwrap()
}

/// Formats a byte count using binary prefixes, e.g. `1073741824` becomes `"1.00 GiB"`.
pub fn fmt_bytes(bytes: u64) -> String {
    const KIB: u64 = 1 << 10;
    const MIB: u64 = 1 << 20;
    const GIB: u64 = 1 << 30;
    match bytes {
        b if b >= GIB => format!("{:.2} GiB", b as f64 / GIB as f64),
        b if b >= MIB => format!("{:.2} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.2} KiB", b as f64 / KIB as f64),
        b => format!("{b} B"),
    }
}

/// Formats an aggregated value as `avg (± stdev) unit`, omitting the stdev if it is not
/// available (fewer than two samples).
pub fn fmt_mean_stdev(mean: f64, stdev: Option<f64>, unit: &str) -> String {
    match stdev {
        Some(s) => format!("{mean:.2} (± {s:.2}) {unit}"),
        None => format!("{mean:.2} {unit}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bytes_formatting() {
        assert_eq!(fmt_bytes(512), "512 B");
        assert_eq!(fmt_bytes(2048), "2.00 KiB");
        assert_eq!(fmt_bytes(200 * (1 << 20)), "200.00 MiB");
        assert_eq!(fmt_bytes(1 << 30), "1.00 GiB");
    }

    #[test]
    fn mean_stdev_formatting() {
        assert_eq!(fmt_mean_stdev(12.0, Some(2.0), "Mbps"), "12.00 (± 2.00) Mbps");
        assert_eq!(fmt_mean_stdev(12.345, None, "Mbps"), "12.35 Mbps");
    }
}
