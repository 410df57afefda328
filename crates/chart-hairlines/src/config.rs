// File: crates/chart-hairlines/src/config.rs
// Summary: Tunables for the hairline plugin.

use std::time::Duration;

use crate::error::HairlineError;

/// How an info panel picks the values it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NearestMode {
    /// Snap to the data row closest to the hairline.
    Closest,
    /// Reserved. Interpolating between rows is not supported.
    Interpolate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HairlineConfig {
    /// Wait after a click before creating a hairline; a double-click inside it cancels.
    pub click_delay: Duration,
    pub nearest_mode: NearestMode,
    /// Width in pixels of the grab handle centred on each line.
    pub handle_width: f64,
}

impl HairlineConfig {
    pub const CLICK_DELAY: Duration = Duration::from_millis(300);
    pub const HANDLE_WIDTH: f64 = 6.0;

    pub fn with_click_delay(mut self, delay: Duration) -> Self {
        self.click_delay = delay;
        self
    }

    pub fn with_nearest_mode(mut self, mode: NearestMode) -> Self {
        self.nearest_mode = mode;
        self
    }

    pub fn with_handle_width(mut self, width: f64) -> Self {
        self.handle_width = width;
        self
    }

    pub fn validate(&self) -> Result<(), HairlineError> {
        if self.nearest_mode != NearestMode::Closest {
            return Err(HairlineError::UnsupportedMode(self.nearest_mode));
        }
        if self.click_delay.is_zero() {
            return Err(HairlineError::ZeroClickDelay);
        }
        Ok(())
    }
}

impl Default for HairlineConfig {
    fn default() -> Self {
        Self {
            click_delay: Self::CLICK_DELAY,
            nearest_mode: NearestMode::Closest,
            handle_width: Self::HANDLE_WIDTH,
        }
    }
}
