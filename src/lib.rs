//! # Testing Drills
//!
//! Small toy functions, each paired with a test module that shows one
//! testing technique.
//!
//! ## Patterns Covered
//!
//! 2. **Asserting Errors** - `p2_asserting_exceptions`, the age gate
//! 3. **Skipping and Expected Failures** - `p3_markers`
//! 4. **Parameterized Tests** - `p4_parameterizing`, login status codes
//! 5. **Fixtures** - `p5_fixtures`, db handle, file writer, mutant fight
//! 6. **Mocks and Stub Servers** - `p6_mocking`, credential check, todo fetch
//! 8. **Property-Based Testing** - `p8_property_based`, age classification
//!
//! ## Running
//!
//! ```bash
//! cargo test                      # everything
//! cargo test p4_parameterizing    # one pattern
//! cargo test -- --ignored         # the ignored marker tests
//! cargo run --bin drills -- login john supersecret
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - the crate error type
//! - `reqwest` / `tokio` - the network drills
//! - `proptest`, `quickcheck`, `mockall`, `wiremock`, `tempfile` - test tooling

pub mod config;
pub mod error;
pub mod logging;
pub mod p2_asserting_exceptions;
pub mod p3_markers;
pub mod p4_parameterizing;
pub mod p5_fixtures;
pub mod p6_mocking;
pub mod p8_property_based;

pub use config::DrillsConfig;
pub use error::{DrillError, Result};
