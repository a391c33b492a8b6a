//! UUID version 6 for checkpoint ids.
//!
//! UUID6 is a time-ordered UUID variant: the timestamp is stored big-endian
//! at the front, so ids generated later sort after earlier ones. Monotonic
//! within the same 100-nanosecond interval.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// The last issued UUID6 timestamp, to keep ids monotonic.
static LAST_V6_TIMESTAMP: AtomicU64 = AtomicU64::new(0);

/// A UUID version 6 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid6 {
    bytes: [u8; 16],
}

impl Uuid6 {
    fn from_int(mut int_val: u128) -> Self {
        // RFC 4122 variant (10xx).
        int_val &= !(0xC000_u128 << 48);
        int_val |= 0x8000_u128 << 48;

        // Version 6.
        int_val &= !(0xF000_u128 << 64);
        int_val |= 6_u128 << 76;

        Self {
            bytes: int_val.to_be_bytes(),
        }
    }

    /// Returns the UUID version (always 6 for values from [`uuid6`]).
    pub fn version(&self) -> u8 {
        (self.bytes[6] >> 4) & 0x0F
    }
}

impl std::fmt::Display for Uuid6 {
    /// Formats the UUID as the usual hyphenated 8-4-4-4-12 string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3],
            self.bytes[4], self.bytes[5],
            self.bytes[6], self.bytes[7],
            self.bytes[8], self.bytes[9],
            self.bytes[10], self.bytes[11], self.bytes[12], self.bytes[13], self.bytes[14], self.bytes[15]
        )
    }
}

/// Generates a new UUID version 6.
///
/// If multiple UUIDs are requested within the same 100-nanosecond interval,
/// the timestamp is bumped to keep ids strictly increasing.
pub fn uuid6() -> Uuid6 {
    let nanoseconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    // 100-ns intervals between the UUID epoch (1582-10-15) and the Unix epoch.
    const UUID_EPOCH_OFFSET: u64 = 0x01b2_1dd2_1381_4000;
    let mut timestamp = nanoseconds / 100 + UUID_EPOCH_OFFSET;

    loop {
        let last = LAST_V6_TIMESTAMP.load(Ordering::SeqCst);
        if timestamp <= last {
            timestamp = last + 1;
        }
        match LAST_V6_TIMESTAMP.compare_exchange(last, timestamp, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => break,
            Err(_) => continue,
        }
    }

    let node = rand_u48();
    let clock_seq = (rand_u48() & 0x3FFF) as u16;

    let time_high_and_mid = (timestamp >> 12) & 0xFFFF_FFFF_FFFF;
    let time_low = timestamp & 0x0FFF;

    let mut uuid_int: u128 = (time_high_and_mid as u128) << 80;
    uuid_int |= (time_low as u128) << 64;
    uuid_int |= (clock_seq as u128) << 48;
    uuid_int |= (node & 0xFFFF_FFFF_FFFF) as u128;

    Uuid6::from_int(uuid_int)
}

/// XorShift over the clock; good enough for the node/clock_seq fields.
fn rand_u48() -> u64 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42);

    let mut state = seed ^ 0xDEAD_BEEF_CAFE_BABE;
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;

    state & 0xFFFF_FFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid6_has_version_6() {
        assert_eq!(uuid6().version(), 6);
    }

    /// **Scenario**: Rapid generation stays unique and time-ordered.
    #[test]
    fn uuid6_unique_and_monotonic() {
        let ids: Vec<String> = (0..1000).map(|_| uuid6().to_string()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len(), "all ids unique");
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "{} should sort after {}", pair[1], pair[0]);
        }
    }

    /// **Scenario**: String format is 8-4-4-4-12 with the version digit at the third group.
    #[test]
    fn uuid6_string_format() {
        let s = uuid6().to_string();
        let parts: Vec<&str> = s.split('-').collect();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0].len(), 8);
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 4);
        assert_eq!(parts[3].len(), 4);
        assert_eq!(parts[4].len(), 12);
        assert!(parts[2].starts_with('6'));
    }
}
