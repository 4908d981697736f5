//! hsv_picker - A reactive gesture-to-color engine for HSV pickers
//!
//! This crate turns drag gestures on a hue/saturation wheel and a
//! brightness slider into one HSV color. A small dependency graph keeps
//! thumb positions, the decoded color, and derived render values in sync;
//! change and commit callbacks tell the host when the selection moves and
//! when it settles. The engine is UI-agnostic: hosts feed it layout
//! measurements and gesture samples and draw from a [`RenderSnapshot`].

mod callback;
mod color;
mod config;
mod constants;
mod geometry;
mod gesture;
mod graph;
mod notify;
mod picker;

pub use callback::Callback;
pub use color::{Hsv, Rgb8, hsv_to_rgb, pack_rgb, unpack_rgb, value_to_grayscale};
pub use config::{CONFIG_VERSION, ConfigError, PickerConfig};
pub use constants::{DEFAULT_INITIAL_VALUE, DEFAULT_THUMB_SIZE, THUMB_TOLERANCE_DIVISOR};
pub use geometry::{
    Point, SliderGeometry, WheelGeometry, clamp_to_circle, distance, position_to_hue_saturation,
    snap_to_center, to_cartesian,
};
pub use gesture::{GesturePhase, GestureSample, GestureTracker};
pub use graph::{NodeId, ValueGraph};
pub use notify::{Notifications, resolve_notifications};
pub use picker::{Control, Generation, HsvPicker, RenderSnapshot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::Hsv;
    pub use crate::config::PickerConfig;
    pub use crate::geometry::Point;
    pub use crate::gesture::{GesturePhase, GestureSample};
    pub use crate::picker::{Control, Generation, HsvPicker, RenderSnapshot};
}
