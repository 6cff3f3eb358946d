// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pace (minutes per kilometer) derived from distance and elapsed time.

/// Parse an elapsed time of `HH:MM:SS` or `MM:SS` into total minutes.
fn elapsed_minutes(time: &str) -> Option<f64> {
    let parts = time
        .split(':')
        .map(|p| p.trim().parse::<i64>().ok())
        .collect::<Option<Vec<i64>>>()?;

    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => (0, *m, *s),
        _ => return None,
    };

    let whole_minutes = hours.checked_mul(60)?.checked_add(minutes)?;
    Some(whole_minutes as f64 + seconds as f64 / 60.0)
}

/// Compute pace as `MM:SS` per km.
///
/// Returns `None` when the distance is missing or not positive, or when the
/// time cannot be parsed. Seconds are truncated, not rounded.
pub fn compute_pace(distance_km: Option<f64>, time: Option<&str>) -> Option<String> {
    let distance_km = distance_km?;
    // Also rejects NaN.
    if !(distance_km > 0.0) {
        return None;
    }

    let total_minutes = elapsed_minutes(time?)?;
    if total_minutes < 0.0 {
        return None;
    }

    let pace = total_minutes / distance_km;
    if !pace.is_finite() {
        return None;
    }

    let pace_mins = pace.trunc();
    let pace_secs = ((pace - pace_mins) * 60.0).trunc();

    Some(format!("{:02}:{:02}", pace_mins as u64, pace_secs as u64))
}
