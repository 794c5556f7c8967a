// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only wiring in main.rs.
pub mod packet;
pub mod summary;
pub mod workout;

pub use packet::{decode_feed, DecodeError, SensorPacket};
pub use summary::SessionSummary;
pub use workout::Workout;
