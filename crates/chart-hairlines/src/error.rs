// File: crates/chart-hairlines/src/error.rs
// Summary: Error type for the hairline plugin.

use thiserror::Error;

use crate::config::NearestMode;
use crate::manager::HairlineId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HairlineError {
    #[error("tried to use non-existent hairline {0}")]
    UnknownHairline(HairlineId),
    #[error("nearest-value mode {0:?} is not supported")]
    UnsupportedMode(NearestMode),
    #[error("click delay must be non-zero so a double-click can cancel creation")]
    ZeroClickDelay,
}
