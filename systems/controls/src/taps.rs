use std::time::Duration;

use crate::Config;

/// States of the double-tap recogniser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapState {
    /// No tap is pending.
    Idle,
    /// A tap was recognised and the next one may complete a double tap.
    AwaitingSecondTap {
        /// Time at which the pending tap was pressed.
        first_down: Duration,
    },
}

/// Two-state double-tap recogniser driven by pointer releases.
#[derive(Clone, Copy, Debug)]
pub struct TapDetector {
    config: Config,
    state: TapState,
}

impl Default for TapDetector {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl TapDetector {
    /// Creates an idle recogniser.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            state: TapState::Idle,
        }
    }

    /// Current recogniser state.
    #[must_use]
    pub const fn state(&self) -> TapState {
        self.state
    }

    /// Feeds a pointer release and reports whether it completed a double tap.
    ///
    /// Presses held for the tap threshold or longer are not taps and leave the
    /// state untouched.
    pub fn release(&mut self, down_at: Duration, released_at: Duration) -> bool {
        if released_at.saturating_sub(down_at) >= self.config.tap_threshold() {
            return false;
        }

        match self.state {
            TapState::AwaitingSecondTap { first_down }
                if down_at.saturating_sub(first_down) < self.config.double_tap_window() =>
            {
                self.state = TapState::Idle;
                true
            }
            _ => {
                self.state = TapState::AwaitingSecondTap {
                    first_down: down_at,
                };
                false
            }
        }
    }

    /// Drops a pending tap once no second tap could still complete at `now`.
    ///
    /// A second press may start just inside the double-tap window and be held
    /// for up to the tap threshold, so the pending tap outlives the window by
    /// that much.
    pub fn expire(&mut self, now: Duration) {
        if let TapState::AwaitingSecondTap { first_down } = self.state {
            let deadline = self.config.double_tap_window() + self.config.tap_threshold();
            if now.saturating_sub(first_down) >= deadline {
                self.state = TapState::Idle;
            }
        }
    }
}
