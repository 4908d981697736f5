//! Gesture phases and per-control tracking.

use crate::geometry::Point;

/// Lifecycle phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture has touched this control yet, or its last one was consumed
    #[default]
    Idle,
    /// First contact
    Began,
    /// Movement while held
    Active,
    /// Lifted normally
    Ended,
    /// Cancelled by the system or lost to another recognizer
    Failed,
}

impl GesturePhase {
    /// Whether a finger is currently down.
    pub fn is_live(self) -> bool {
        matches!(self, GesturePhase::Began | GesturePhase::Active)
    }

    /// Whether the gesture is over, including never having started.
    pub fn is_settled(self) -> bool {
        !self.is_live()
    }

    /// Whether the gesture interacted with the control at all.
    ///
    /// `Ended` still counts: the lift position is part of the gesture.
    /// `Failed` does not.
    pub fn is_engaged(self) -> bool {
        matches!(
            self,
            GesturePhase::Began | GesturePhase::Active | GesturePhase::Ended
        )
    }
}

/// One gesture event: where the finger is and what it is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub position: Point,
    pub phase: GesturePhase,
}

impl GestureSample {
    /// Create a new gesture sample.
    pub fn new(position: Point, phase: GesturePhase) -> Self {
        Self { position, phase }
    }
}

/// Tracks the gesture state of a single control.
///
/// The start position is frozen at `Began` and kept through the rest of
/// the gesture, so hit tests evaluate where the finger first landed
/// rather than where it has wandered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
    start: Option<Point>,
}

impl GestureTracker {
    /// Create a tracker in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Start position of the current or most recent gesture.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Fold a sample into the tracker.
    pub fn apply(&mut self, sample: &GestureSample) {
        if sample.phase == GesturePhase::Began {
            self.start = Some(sample.position);
        }
        self.phase = sample.phase;
    }

    /// Return the tracker to idle after its outcome has been reported.
    pub fn consume(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}
