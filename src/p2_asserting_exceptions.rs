// Pattern 2: Asserting Errors
// Demonstrates how to assert that a fallible function fails, with which
// variant, and with which message.

use crate::error::{DrillError, Result};

pub const LEGAL_DRINKING_AGE: u32 = 18;

// ============================================================================
// Example: The Age Gate
// ============================================================================

/// Lets `age` into the pub, or refuses with [`DrillError::Underage`].
pub fn enter_the_pub(age: u32) -> Result<()> {
    if age < LEGAL_DRINKING_AGE {
        tracing::debug!(age, "entry refused");
        return Err(DrillError::Underage { age });
    }
    Ok(())
}

// ============================================================================
// Example: Asserting the Error Variant and Message
// ============================================================================


// ============================================================================
// Example: The Same Checks as Properties
// ============================================================================
