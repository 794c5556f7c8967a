use serde::Serialize;
use std::fmt;

/// Derived metrics for one workout session.
///
/// Produced by [`crate::workout::Workout::summary`]; the `Display`
/// implementation renders the fixed single-line report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub workout: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}
