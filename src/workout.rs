use crate::summary::SessionSummary;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
const CM_IN_M: f64 = 100.0;
/// km/h to m/s.
const KMH_IN_MS: f64 = 0.278;

/// Distance covered by one step (running, walking), in meters.
const STEP_LEN_M: f64 = 0.65;
/// Distance covered by one stroke (swimming), in meters.
const STROKE_LEN_M: f64 = 1.38;

// Empirical calorie coefficients per workout type.
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;
const WLK_WEIGHT_FACTOR: f64 = 0.035;
const WLK_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// One recorded workout session, decoded from a sensor packet.
///
/// A closed set of variants sharing the raw sensor fields; distance, mean
/// speed and calories are derived on demand, with per-variant formulas.
#[derive(Debug, Clone, Copy, PartialEq, strum_macros::Display)]
pub enum Workout {
    Running {
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Workout {
    /// Number of steps or strokes recorded by the sensor.
    pub fn action_count(&self) -> u32 {
        match *self {
            Workout::Running { action_count, .. }
            | Workout::Walking { action_count, .. }
            | Workout::Swimming { action_count, .. } => action_count,
        }
    }

    /// Session length in hours. Always positive, enforced at decode time.
    pub fn duration_h(&self) -> f64 {
        match *self {
            Workout::Running { duration_h, .. }
            | Workout::Walking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => duration_h,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match *self {
            Workout::Running { weight_kg, .. }
            | Workout::Walking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => weight_kg,
        }
    }

    /// Length of one action in meters: a step on land, a stroke in the pool.
    fn stride_m(&self) -> f64 {
        match self {
            Workout::Swimming { .. } => STROKE_LEN_M,
            _ => STEP_LEN_M,
        }
    }

    /// Distance covered over the session, in km.
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.stride_m() / M_IN_KM
    }

    /// Average speed over the session, in km/h.
    ///
    /// Swimming derives speed from pool length and lap count rather than
    /// stroke distance.
    pub fn mean_speed_kmh(&self) -> f64 {
        match *self {
            Workout::Swimming {
                duration_h,
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * f64::from(pool_laps) / M_IN_KM / duration_h,
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Estimated energy expenditure over the session, in kcal.
    pub fn calories_kcal(&self) -> f64 {
        match *self {
            Workout::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT) * weight_kg
                    / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Walking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                let mean_speed_ms = self.mean_speed_kmh() * KMH_IN_MS;
                (WLK_WEIGHT_FACTOR * weight_kg
                    + mean_speed_ms.powi(2) / (height_cm / CM_IN_M)
                        * WLK_SPEED_HEIGHT_FACTOR
                        * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Swimming {
                duration_h,
                weight_kg,
                ..
            } => {
                (self.mean_speed_kmh() + SWM_SPEED_SHIFT)
                    * SWM_WEIGHT_MULTIPLIER
                    * weight_kg
                    * duration_h
            }
        }
    }

    /// Derive the full per-session summary record.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            workout: self.to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
