// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Monotonic clock sampling for per-test duration, millisecond resolution.

use std::time::Instant;

/// A single sample of the monotonic clock.
///
/// Wraps `Instant` rather than exposing it directly so callers always go
/// through `elapsed_ms`, which is the only operation the rest of the
/// engine needs.
#[derive(Clone, Copy, Debug)]
pub struct ClockMark(Instant);

/// Samples the clock just before an operation starts.
pub fn mark() -> ClockMark {
    ClockMark(Instant::now())
}

impl ClockMark {
    /// Milliseconds elapsed between this mark and now.
    pub fn elapsed_ms(self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn elapsed_is_non_negative_and_monotonic() {
        let start = mark();
        sleep(Duration::from_millis(5));
        let elapsed = start.elapsed_ms();
        assert!(elapsed >= 5);
    }
}
