//! Push id generation
//!
//! 20-character keys: 8 characters of millisecond timestamp followed by a
//! 12-character sequence. Keys sort lexicographically in creation order.

const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone)]
pub struct PushIdGenerator {
    last_time: i64,
    sequence: [u8; 12],
}

impl Default for PushIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PushIdGenerator {
    pub fn new() -> Self {
        Self { last_time: -1, sequence: [0; 12] }
    }

    /// Next key stamped with the current wall clock
    pub fn next_id(&mut self) -> String {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// Next key for the given millisecond timestamp.
    /// A clock that goes backwards reuses the last timestamp.
    pub fn next_at(&mut self, now_ms: i64) -> String {
        let now = now_ms.max(self.last_time).max(0);
        if now == self.last_time {
            self.bump_sequence();
        } else {
            self.sequence = [0; 12];
            self.last_time = now;
        }

        let mut id = [0u8; 20];
        let mut t = now;
        for slot in id[..8].iter_mut().rev() {
            *slot = PUSH_CHARS[(t % 64) as usize];
            t /= 64;
        }
        for (slot, digit) in id[8..].iter_mut().zip(self.sequence.iter()) {
            *slot = PUSH_CHARS[*digit as usize];
        }
        id.iter().map(|b| *b as char).collect()
    }

    fn bump_sequence(&mut self) {
        for digit in self.sequence.iter_mut().rev() {
            if *digit < 63 {
                *digit += 1;
                return;
            }
            *digit = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_id_length() {
        let mut ids = PushIdGenerator::new();
        assert_eq!(ids.next_at(1_700_000_000_000).len(), 20);
    }

    #[test]
    fn test_same_millisecond_ids_increase() {
        let mut ids = PushIdGenerator::new();
        let a = ids.next_at(42);
        let b = ids.next_at(42);
        let c = ids.next_at(42);
        assert!(a < b && b < c);
        assert_eq!(a[..8], b[..8]);
    }

    #[test]
    fn test_later_timestamp_sorts_after() {
        let mut ids = PushIdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_001);
        assert!(a < b);
    }

    #[test]
    fn test_clock_going_backwards_stays_monotonic() {
        let mut ids = PushIdGenerator::new();
        let a = ids.next_at(5_000);
        let b = ids.next_at(4_000);
        assert!(a < b);
    }
}
