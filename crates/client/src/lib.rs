pub mod client;
pub mod error;

pub use client::{EXPECTED_GREETING, EXPECTED_STATUS, SmokeClient};
pub use error::{CheckError, CheckResult};
