//! Human-readable duration and distance for the route header.

/// Whole minutes, floored. Under an hour: `"<m> min"`, otherwise `"<h>h <m>min"`.
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0).floor() as u64;
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    format!("{}h {}min", minutes / 60, minutes % 60)
}

/// Whole meters under 1 km, otherwise kilometers with one decimal.
///
/// The tenths digit is rounded half up on the exact decimal value of the
/// kilometer float, so `1250 m` is `1.3 km` while `1150 m` (stored as
/// `1.1499..`) is `1.1 km`. `{:.1}` alone would send exact ties to even.
pub fn format_distance(meters: f64) -> String {
    let meters = meters.max(0.0);
    if meters < 1000.0 {
        return format!("{} m", meters.round() as u64);
    }
    let km = meters / 1000.0;
    // 60 places covers every fractional bit of an f64 of at least 1.0.
    let expanded = format!("{:.60}", km);
    let fraction = expanded.split_once('.').map_or("", |(_, f)| f).as_bytes();
    let digit = |i: usize| fraction.get(i).map_or(0, |d| u64::from(d - b'0'));

    let tenths = km.trunc() as u64 * 10 + digit(0) + u64::from(digit(1) >= 5);
    format!("{}.{} km", tenths / 10, tenths % 10)
}

/// Header line shown above the instruction list.
pub fn format_summary(duration_s: f64, distance_m: f64) -> String {
    format!("{} • {}", format_duration(duration_s), format_distance(distance_m))
}
