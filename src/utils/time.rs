//! Duration formatting in project units (years, months, weeks, days, hours).

use crate::models::TimeParams;
use chrono::Duration;

/// Render a duration using the project's conversion factors,
/// e.g. `1w 2d 3h 15m`. Zero renders as `0m`.
pub fn format_duration(d: Duration, params: &TimeParams) -> String {
    let total = d.num_minutes().max(0) as f64;

    let hour = 60.0;
    let day = hour * params.day;
    let week = day * params.week;
    let month = week * params.month;
    let year = month * params.year;
    let units = [("y", year), ("mo", month), ("w", week), ("d", day), ("h", hour)];

    let mut rest = total;
    let mut parts = Vec::new();
    for (suffix, size) in units {
        let n = (rest / size).floor();
        if n >= 1.0 {
            parts.push(format!("{}{}", n as i64, suffix));
            rest -= n * size;
        }
    }

    // rest < 60 here; rounding up could print "60m"
    let minutes = rest.floor() as i64;
    if minutes > 0 || parts.is_empty() {
        parts.push(format!("{}m", minutes));
    }
    parts.join(" ")
}
