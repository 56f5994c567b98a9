//! oem lib test modules
pub mod toolkit;

mod repair;

#[cfg(feature = "serde")]
mod serde;
