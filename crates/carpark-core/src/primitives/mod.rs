// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod affine;

pub use affine::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeMarker;

impl MarkerName for TimeMarker {
    const NAME_POINT: &'static str = "TimePoint";
    const NAME_DELTA: &'static str = "TimeDelta";
}

/// A point on the time axis. The engine counts milliseconds since the Unix epoch.
pub type TimePoint<T> = Point<T, TimeMarker>;
pub type TimeDelta<T> = Delta<T, TimeMarker>;

pub const MILLIS_PER_SECOND: i64 = 1_000;

impl TimeDelta<i64> {
    #[inline]
    pub const fn from_millis(ms: i64) -> Self {
        Delta::new(ms)
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Delta::new(secs.saturating_mul(MILLIS_PER_SECOND))
    }

    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.value()
    }

    /// Fractional number of seconds covered by this delta.
    #[inline]
    pub fn as_seconds_f64(self) -> f64 {
        self.value() as f64 / MILLIS_PER_SECOND as f64
    }
}

impl TimePoint<i64> {
    #[inline]
    pub const fn from_millis(ms: i64) -> Self {
        Point::new(ms)
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Point::new(secs.saturating_mul(MILLIS_PER_SECOND))
    }
}
