//! Auto-dismiss schedule for flash message banners.

use chrono::{DateTime, TimeDelta, Utc};

/// How long a banner stays fully visible, in milliseconds.
pub const FADE_DELAY_MS: i32 = 5_000;
/// How long the opacity transition runs before the banner is hidden, in milliseconds.
pub const FADE_DURATION_MS: i32 = 1_000;

/// Ordered: a banner only ever moves forward through the phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FlashPhase {
    Visible,
    /// Opacity set to 0; the stylesheet animates the transition.
    Fading,
    /// `fade-out` class applied.
    Hidden,
}

impl FlashPhase {
    /// Whether the banner's opacity is 0 in this phase.
    pub fn is_transparent(self) -> bool {
        self >= Self::Fading
    }

    /// Whether the banner carries the `fade-out` class in this phase.
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

/// Fade schedule of one banner, anchored at the moment the page was ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashFade {
    shown_at: DateTime<Utc>,
}

impl FlashFade {
    pub fn new(shown_at: DateTime<Utc>) -> Self {
        Self { shown_at }
    }

    pub fn fade_at(&self) -> DateTime<Utc> {
        self.shown_at + TimeDelta::milliseconds(FADE_DELAY_MS.into())
    }

    pub fn hide_at(&self) -> DateTime<Utc> {
        self.fade_at() + TimeDelta::milliseconds(FADE_DURATION_MS.into())
    }

    pub fn phase_at(&self, now: DateTime<Utc>) -> FlashPhase {
        if now < self.fade_at() {
            FlashPhase::Visible
        } else if now < self.hide_at() {
            FlashPhase::Fading
        } else {
            FlashPhase::Hidden
        }
    }

    /// Timer delay from `now` until the banner starts fading; 0 once due.
    pub fn millis_until_fade(&self, now: DateTime<Utc>) -> i32 {
        millis_until(self.fade_at(), now)
    }

    /// Timer delay from `now` until the banner is hidden; 0 once due.
    pub fn millis_until_hide(&self, now: DateTime<Utc>) -> i32 {
        millis_until(self.hide_at(), now)
    }
}

fn millis_until(at: DateTime<Utc>, now: DateTime<Utc>) -> i32 {
    let millis = (at - now).num_milliseconds().max(0);
    i32::try_from(millis).unwrap_or(i32::MAX)
}
