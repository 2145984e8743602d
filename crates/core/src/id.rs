//! Service id generation.

use chrono::Utc;
use rand::Rng;

/// Generate a human-readable service id.
///
/// Format: `SRV` + last 6 digits of the current Unix millisecond clock +
/// a zero-padded 3-digit random suffix, e.g. `SRV734921047`.
///
/// The format is stable but NOT cryptographically unique: two calls inside
/// the same millisecond collide with probability 1/1000. Callers on the
/// create path guard against this by checking the store and retrying; see
/// the create handler.
pub fn generate_service_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1000);
    format!("SRV{:06}{:03}", millis.rem_euclid(1_000_000), suffix)
}
