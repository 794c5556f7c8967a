use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::workout::Workout;

/// Decode failures for raw sensor packets.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("unknown workout code `{0}`")]
    UnknownCode(String),

    #[error("`{code}` packet carries {got} values, expected {expected}")]
    PayloadArity {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("session duration must be positive, got {0} h")]
    NonPositiveDuration(f64),
}

/// One raw reading off the sensor wire: a 3-letter workout code plus an
/// ordered list of numeric values whose layout depends on the code.
///
/// Layouts:
/// - `RUN`: `[action_count, duration_h, weight_kg]`
/// - `WLK`: `[action_count, duration_h, weight_kg, height_cm]`
/// - `SWM`: `[action_count, duration_h, weight_kg, pool_length_m, pool_laps]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    pub code: String,
    pub values: Vec<f64>,
}

impl SensorPacket {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    /// Decode the packet into a typed workout session.
    ///
    /// Fails on an unrecognized code, a payload whose length does not match
    /// the code's fixed arity, or a nonpositive duration.
    pub fn decode(&self) -> Result<Workout, DecodeError> {
        let workout = match self.code.as_str() {
            "RUN" => {
                let [action_count, duration_h, weight_kg] = self.payload()?;
                Workout::Running {
                    action_count: action_count as u32,
                    duration_h,
                    weight_kg,
                }
            }
            "WLK" => {
                let [action_count, duration_h, weight_kg, height_cm] = self.payload()?;
                Workout::Walking {
                    action_count: action_count as u32,
                    duration_h,
                    weight_kg,
                    height_cm,
                }
            }
            "SWM" => {
                let [action_count, duration_h, weight_kg, pool_length_m, pool_laps] =
                    self.payload()?;
                Workout::Swimming {
                    action_count: action_count as u32,
                    duration_h,
                    weight_kg,
                    pool_length_m,
                    pool_laps: pool_laps as u32,
                }
            }
            _ => return Err(DecodeError::UnknownCode(self.code.clone())),
        };

        if workout.duration_h() <= 0.0 {
            return Err(DecodeError::NonPositiveDuration(workout.duration_h()));
        }

        debug!(code = %self.code, values = self.values.len(), "decoded sensor packet");
        Ok(workout)
    }

    /// Extract the payload as a fixed-size array; the expected arity is
    /// inferred from the destructuring pattern at the call site.
    fn payload<const N: usize>(&self) -> Result<[f64; N], DecodeError> {
        <[f64; N]>::try_from(self.values.as_slice()).map_err(|_| DecodeError::PayloadArity {
            code: self.code.clone(),
            expected: N,
            got: self.values.len(),
        })
    }
}

/// Decode a whole packet feed, failing on the first bad packet.
pub fn decode_feed(packets: &[SensorPacket]) -> Result<Vec<Workout>, DecodeError> {
    packets.iter().map(SensorPacket::decode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn decodes_running_packet() {
        let packet = SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]);
        assert_eq!(
            packet.decode().unwrap(),
            Workout::Running {
                action_count: 15000,
                duration_h: 1.0,
                weight_kg: 75.0,
            }
        );
    }

    #[test]
    fn decodes_walking_packet() {
        let packet = SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        assert_eq!(
            packet.decode().unwrap(),
            Workout::Walking {
                action_count: 9000,
                duration_h: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            }
        );
    }

    #[test]
    fn decodes_swimming_packet() {
        let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        assert_eq!(
            packet.decode().unwrap(),
            Workout::Swimming {
                action_count: 720,
                duration_h: 1.0,
                weight_kg: 80.0,
                pool_length_m: 25.0,
                pool_laps: 40,
            }
        );
    }

    #[test]
    fn rejects_unknown_code() {
        let packet = SensorPacket::new("XYZ", vec![1.0, 1.0, 1.0]);
        assert_matches!(packet.decode(), Err(DecodeError::UnknownCode(code)) if code == "XYZ");
    }

    #[test]
    fn rejects_wrong_payload_arity() {
        let packet = SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0, 180.0]);
        assert_eq!(
            packet.decode(),
            Err(DecodeError::PayloadArity {
                code: "RUN".to_string(),
                expected: 3,
                got: 4,
            })
        );

        let packet = SensorPacket::new("SWM", vec![720.0, 1.0]);
        assert_matches!(
            packet.decode(),
            Err(DecodeError::PayloadArity { expected: 5, got: 2, .. })
        );
    }

    #[test]
    fn rejects_nonpositive_duration() {
        let packet = SensorPacket::new("RUN", vec![15000.0, 0.0, 75.0]);
        assert_matches!(packet.decode(), Err(DecodeError::NonPositiveDuration(d)) if d == 0.0);

        let packet = SensorPacket::new("WLK", vec![9000.0, -1.0, 75.0, 180.0]);
        assert_matches!(packet.decode(), Err(DecodeError::NonPositiveDuration(d)) if d == -1.0);
    }

    #[test]
    fn deserializes_from_wire_json() {
        let packet: SensorPacket =
            serde_json::from_str(r#"{ "code": "SWM", "values": [720, 1, 80, 25, 40] }"#).unwrap();
        assert_eq!(
            packet,
            SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0])
        );
    }

    #[test]
    fn feed_decoding_stops_at_first_bad_packet() {
        let feed = vec![
            SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPacket::new("BIK", vec![1.0, 1.0, 1.0]),
            SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];
        assert_matches!(
            decode_feed(&feed),
            Err(DecodeError::UnknownCode(code)) if code == "BIK"
        );
    }

    #[test]
    fn feed_decoding_preserves_order() {
        let feed = vec![
            SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];
        let workouts = decode_feed(&feed).unwrap();
        assert_eq!(workouts.len(), 2);
        assert_matches!(workouts[0], Workout::Swimming { .. });
        assert_matches!(workouts[1], Workout::Running { .. });
    }
}
