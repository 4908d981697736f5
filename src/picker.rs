//! The picker engine.
//!
//! [`HsvPicker`] owns the dependency graph that turns gesture positions on
//! a hue/saturation wheel and a brightness slider into one HSV color.
//! Hosts feed it layout measurements and gesture samples; it pushes colors
//! back out through callbacks and exposes a [`RenderSnapshot`] for drawing.
//!
//! The graph is rebuilt whenever a control is measured or resized. Each
//! rebuild bumps a [`Generation`]; gesture samples carry the generation
//! they were produced under, so events queued against an old layout are
//! dropped instead of being interpreted in the new one.

use crate::callback::Callback;
use crate::color::{Hsv, Rgb8, hsv_to_rgb, pack_rgb, unpack_rgb, value_to_grayscale};
use crate::config::{ConfigError, PickerConfig};
use crate::geometry::{
    Point, SliderGeometry, WheelGeometry, clamp_to_circle, position_to_hue_saturation,
    snap_to_center,
};
use crate::gesture::{GestureSample, GestureTracker};
use crate::graph::{NodeId, ValueGraph};
use crate::notify::resolve_notifications;

/// The two input controls of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Hue/saturation wheel
    Wheel,
    /// Brightness slider
    Slider,
}

/// Identifies one incarnation of the dependency graph.
///
/// Bumped on every layout change. Samples from a previous generation
/// describe positions in a geometry that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Node handles for the wheel's position chain.
#[derive(Debug, Clone, Copy)]
struct WheelNodes {
    pos_x: NodeId,
    pos_y: NodeId,
    translate_x: NodeId,
    translate_y: NodeId,
}

/// Node handles for the slider's position chain.
#[derive(Debug, Clone, Copy)]
struct SliderNodes {
    pos: NodeId,
    translate: NodeId,
}

/// Node handles into the current graph generation.
#[derive(Debug, Clone, Copy)]
struct GraphNodes {
    hue: NodeId,
    saturation: NodeId,
    value: NodeId,
    rgb: NodeId,
    wheel_opacity: NodeId,
    wheel: Option<WheelNodes>,
    slider: Option<SliderNodes>,
}

/// Everything a host needs to draw the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    /// Current logical color
    pub color: Hsv,
    /// Current color as RGB, for the preview swatch
    pub preview: Rgb8,
    /// Wheel thumb position, top-left anchored, once the wheel is measured
    pub wheel_thumb: Option<Point>,
    /// Opacity of the darkening overlay on the wheel, `1 - value`
    pub wheel_overlay_opacity: f32,
    /// Slider thumb travel in pixels, once the slider is measured
    pub slider_thumb: Option<f32>,
    /// Grayscale swatch for the slider thumb
    pub slider_thumb_color: Rgb8,
}

/// Reactive HSV picker engine.
///
/// The picker is UI-agnostic. A host widget forwards layout measurements
/// through [`set_layout`](Self::set_layout) and gesture events through
/// [`handle_gesture`](Self::handle_gesture), then draws whatever
/// [`snapshot`](Self::snapshot) returns.
#[derive(Debug)]
pub struct HsvPicker {
    config: PickerConfig,
    on_color_change: Callback<Hsv>,
    on_color_change_complete: Callback<Hsv>,
    generation: Generation,
    wheel_size: Option<(f32, f32)>,
    slider_size: Option<(f32, f32)>,
    wheel_geometry: Option<WheelGeometry>,
    slider_geometry: Option<SliderGeometry>,
    wheel_gesture: GestureTracker,
    slider_gesture: GestureTracker,
    graph: ValueGraph,
    nodes: GraphNodes,
}

impl HsvPicker {
    /// Create a picker from a validated configuration.
    ///
    /// The picker starts unmeasured: the color is readable immediately,
    /// but gestures are ignored until the controls report their layouts.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (graph, nodes) = build_graph(
            config.initial_color(),
            None,
            None,
            config.snap_to_center_threshold,
        );
        Ok(Self {
            config,
            on_color_change: Callback::none(),
            on_color_change_complete: Callback::none(),
            generation: Generation::default(),
            wheel_size: None,
            slider_size: None,
            wheel_geometry: None,
            slider_geometry: None,
            wheel_gesture: GestureTracker::new(),
            slider_gesture: GestureTracker::new(),
            graph,
            nodes,
        })
    }

    /// Set the callback fired on every in-flight color change.
    pub fn on_color_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Hsv) + 'static,
    {
        self.on_color_change = Callback::new(f);
        self
    }

    /// Set the callback fired when a selection is committed.
    pub fn on_color_change_complete<F>(mut self, f: F) -> Self
    where
        F: Fn(Hsv) + 'static,
    {
        self.on_color_change_complete = Callback::new(f);
        self
    }

    /// Record a control's measured size and rebuild the graph around it.
    ///
    /// The logical color is read out of the old graph and seeded into the
    /// new one, so thumbs land where the color says they should rather
    /// than where the old pixels were. Re-reporting an unchanged size is
    /// a no-op; non-finite or negative sizes are rejected.
    ///
    /// For the slider the track runs along the width. No callbacks fire
    /// from a layout change.
    pub fn set_layout(&mut self, control: Control, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            log::warn!("Ignoring invalid {:?} layout {}x{}", control, width, height);
            return;
        }
        let unchanged = match control {
            Control::Wheel => self.wheel_size == Some((width, height)),
            Control::Slider => self.slider_size == Some((width, height)),
        };
        if unchanged {
            return;
        }

        // The seed comes from the old graph before it is torn down.
        let seed = self.color();
        match control {
            Control::Wheel => {
                self.wheel_size = Some((width, height));
                self.wheel_geometry =
                    Some(WheelGeometry::new(width, height, self.config.wheel_thumb_size));
                self.wheel_gesture = GestureTracker::new();
            }
            Control::Slider => {
                self.slider_size = Some((width, height));
                self.slider_geometry =
                    Some(SliderGeometry::new(width, self.config.slider_thumb_size));
                self.slider_gesture = GestureTracker::new();
            }
        }
        self.generation = self.generation.next();
        let (graph, nodes) = build_graph(
            seed,
            self.wheel_geometry,
            self.slider_geometry,
            self.config.snap_to_center_threshold,
        );
        self.graph = graph;
        self.nodes = nodes;
        log::debug!(
            "Rebuilt graph for {:?} layout {}x{}: generation {:?}, {} nodes",
            control,
            width,
            height,
            self.generation,
            self.graph.len()
        );
    }

    /// Feed one gesture sample into the picker.
    ///
    /// `generation` is the graph generation the sample was produced
    /// against; stale samples are dropped. Samples for a control that has
    /// not been measured yet are ignored. Callbacks fire from here, and
    /// only while the wheel is measured.
    pub fn handle_gesture(
        &mut self,
        control: Control,
        generation: Generation,
        sample: GestureSample,
    ) {
        if generation != self.generation {
            log::trace!(
                "Dropping {:?} sample from stale generation {:?} (current {:?})",
                control,
                generation,
                self.generation
            );
            return;
        }
        log::trace!(
            "{:?} sample {:?} at ({}, {})",
            control,
            sample.phase,
            sample.position.x,
            sample.position.y
        );

        match control {
            Control::Wheel => {
                let Some(geometry) = self.wheel_geometry else {
                    log::trace!("Ignoring wheel sample before layout");
                    return;
                };
                self.wheel_gesture.apply(&sample);

                // Positions only flow while the gesture counts: a drag that
                // started outside the interactive band never moves the thumb,
                // and a failed gesture stops moving it.
                if self.wheel_gesture.phase().is_engaged() && self.wheel_start_within_tolerance() {
                    if let Some(wheel) = self.nodes.wheel {
                        let half = geometry.thumb_size / 2.0;
                        self.graph.set_many(&[
                            (wheel.pos_x, sample.position.x - half),
                            (wheel.pos_y, sample.position.y - half),
                        ]);
                    }
                }
            }
            Control::Slider => {
                let Some(geometry) = self.slider_geometry else {
                    log::trace!("Ignoring slider sample before layout");
                    return;
                };
                self.slider_gesture.apply(&sample);

                if self.slider_gesture.phase().is_engaged() {
                    if let Some(slider) = self.nodes.slider {
                        let half = geometry.thumb_size / 2.0;
                        self.graph.set(slider.pos, sample.position.x - half);
                    }
                }
            }
        }

        if self.wheel_geometry.is_some() {
            self.evaluate_notifications();
        }
    }

    /// The current graph generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The current logical color.
    pub fn color(&self) -> Hsv {
        Hsv::new(
            self.graph.get(self.nodes.hue),
            self.graph.get(self.nodes.saturation),
            self.graph.get(self.nodes.value),
        )
    }

    /// The configuration this picker was built with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Snapshot of everything a host needs to draw.
    pub fn snapshot(&self) -> RenderSnapshot {
        let color = self.color();
        RenderSnapshot {
            color,
            preview: unpack_rgb(self.graph.get(self.nodes.rgb)),
            wheel_thumb: self.nodes.wheel.map(|wheel| {
                Point::new(
                    self.graph.get(wheel.translate_x),
                    self.graph.get(wheel.translate_y),
                )
            }),
            wheel_overlay_opacity: self.graph.get(self.nodes.wheel_opacity),
            slider_thumb: self
                .nodes
                .slider
                .map(|slider| self.graph.get(slider.translate)),
            slider_thumb_color: value_to_grayscale(color.v),
        }
    }

    /// Resolve and fire callbacks for the current gesture state.
    fn evaluate_notifications(&mut self) {
        let notifications = resolve_notifications(
            self.wheel_gesture.phase(),
            self.wheel_start_within_tolerance(),
            self.slider_gesture.phase(),
        );
        if !notifications.change && !notifications.commit {
            return;
        }

        let color = self.color();
        if notifications.change {
            self.on_color_change.emit(color);
        }
        if notifications.commit {
            // The slider re-arms for the next drag. The wheel keeps its
            // phase; a new wheel gesture replaces it on its next Began.
            self.slider_gesture.consume();
            log::debug!(
                "Color selection settled: h={:.1} s={:.3} v={:.3}",
                color.h,
                color.s,
                color.v
            );
            self.on_color_change_complete.emit(color);
        }
    }

    /// Whether the current wheel gesture started within the interactive band.
    fn wheel_start_within_tolerance(&self) -> bool {
        match (self.wheel_geometry, self.wheel_gesture.start()) {
            (Some(geometry), Some(start)) => geometry.within_tolerance(start),
            _ => false,
        }
    }
}

/// Wire up a fresh graph for the given geometries.
///
/// Measured controls get a position chain (raw position, clamped
/// translation, decoded component); unmeasured ones collapse to a plain
/// source holding the seed, so the color is well-defined in every
/// combination of measured and unmeasured controls.
fn build_graph(
    seed: Hsv,
    wheel: Option<WheelGeometry>,
    slider: Option<SliderGeometry>,
    snap_threshold: f32,
) -> (ValueGraph, GraphNodes) {
    let mut graph = ValueGraph::new();

    let (hue, saturation, wheel_nodes) = if let Some(geometry) = wheel {
        let center = geometry.center_point();
        let radius = geometry.radius;
        let seed_pos = geometry.thumb_position_for(seed.h, seed.s);

        let pos_x = graph.source(seed_pos.x);
        let pos_y = graph.source(seed_pos.y);
        let translate_x = graph.derived(&[pos_x, pos_y], move |args| {
            let pos = Point::new(args[0], args[1]);
            clamp_to_circle(snap_to_center(pos, center, snap_threshold), center, radius).x
        });
        let translate_y = graph.derived(&[pos_x, pos_y], move |args| {
            let pos = Point::new(args[0], args[1]);
            clamp_to_circle(snap_to_center(pos, center, snap_threshold), center, radius).y
        });
        let hue = graph.derived(&[translate_x, translate_y], move |args| {
            position_to_hue_saturation(Point::new(args[0], args[1]), center, radius).0
        });
        let saturation = graph.derived(&[translate_x, translate_y], move |args| {
            position_to_hue_saturation(Point::new(args[0], args[1]), center, radius).1
        });
        let nodes = WheelNodes {
            pos_x,
            pos_y,
            translate_x,
            translate_y,
        };
        (hue, saturation, Some(nodes))
    } else {
        (graph.source(seed.h), graph.source(seed.s), None)
    };

    let (value, slider_nodes) = if let Some(geometry) = slider {
        let pos = graph.source(geometry.thumb_position_for(seed.v));
        let translate = graph.derived(&[pos], move |args| geometry.clamp_travel(args[0]));
        let value = graph.derived(&[translate], move |args| geometry.value_for(args[0]));
        (value, Some(SliderNodes { pos, translate }))
    } else {
        (graph.source(seed.v), None)
    };

    let rgb = graph.derived(&[hue, saturation, value], |args| {
        pack_rgb(hsv_to_rgb(args[0], args[1], args[2]))
    });
    let wheel_opacity = graph.derived(&[value], |args| 1.0 - args[0]);

    (
        graph,
        GraphNodes {
            hue,
            saturation,
            value,
            rgb,
            wheel_opacity,
            wheel: wheel_nodes,
            slider: slider_nodes,
        },
    )
}
