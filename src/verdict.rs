//! Rain decision rule

/// Precipitation probability (percent) at or above which rain is expected
pub const RAIN_PROBABILITY_THRESHOLD: f64 = 50.0;

/// Decide whether it will rain.
///
/// Any one of these is enough: probability at or above the threshold, a
/// positive rain sum, or a positive number of precipitation hours. Absent
/// readings never count towards rain.
#[must_use]
pub fn will_rain(
    precipitation_probability_max: Option<f64>,
    rain_sum: Option<f64>,
    precipitation_hours: Option<f64>,
) -> bool {
    precipitation_probability_max.is_some_and(|p| p >= RAIN_PROBABILITY_THRESHOLD)
        || rain_sum.is_some_and(|r| r > 0.0)
        || precipitation_hours.is_some_and(|h| h > 0.0)
}
