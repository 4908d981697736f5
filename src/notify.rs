//! Change and commit resolution across the two controls.
//!
//! The wheel and the slider feed one logical color, so notifications are
//! decided from their combined gesture state rather than per control. A
//! change fires while a relevant drag is in flight; a commit fires once
//! both controls have come to rest after a relevant interaction.

use crate::gesture::GesturePhase;

/// Which callbacks an evaluation should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Notifications {
    pub change: bool,
    pub commit: bool,
}

/// Decide notifications from the current gesture state.
///
/// A wheel gesture only counts when it started within the wheel's
/// interactive band; `wheel_started_inside` carries that hit test. A
/// failed wheel gesture never counts, no matter where it started.
///
/// The slider contributes changes only while live. Its `Ended` sample
/// moves the thumb silently and then triggers the commit, so a plain
/// slider drag reports its final value through the commit alone.
pub fn resolve_notifications(
    wheel: GesturePhase,
    wheel_started_inside: bool,
    slider: GesturePhase,
) -> Notifications {
    let inside_wheel = wheel.is_engaged() && wheel_started_inside;
    let change = inside_wheel || slider.is_live();
    let commit = wheel.is_settled()
        && slider.is_settled()
        && (inside_wheel || slider == GesturePhase::Ended);
    Notifications { change, commit }
}
