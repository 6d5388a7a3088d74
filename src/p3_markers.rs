// Pattern 3: Skipping and Expected Failures
// Demonstrates ignored tests, runtime skips, and tests that are expected to fail.

use std::ops::Add;

/// Version the conditional test below is gated on.
pub const SEM_VER: &str = "2.0.0";

/// Adds anything `Add` knows how to add: numbers, or `String + &str`.
pub fn add<A, B>(a: A, b: B) -> A::Output
where
    A: Add<B>,
{
    a + b
}

/// Runtime check used to skip tests that only apply to one release.
pub fn version_is(expected: &str) -> bool {
    SEM_VER == expected
}
