//! Scripted gesture walk-through of the picker engine.
//!
//! Run with: cargo run --example drag_script
//! Set RUST_LOG=debug to watch the graph rebuilds and commits.

use hsv_picker::{Control, GesturePhase, GestureSample, HsvPicker, PickerConfig, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = PickerConfig {
        initial_hue: 180.0,
        initial_saturation: 0.6,
        ..Default::default()
    };

    let mut picker = HsvPicker::new(config)?
        .on_color_change(|color| {
            println!("  change    h={:6.1} s={:.3} v={:.3}", color.h, color.s, color.v);
        })
        .on_color_change_complete(|color| {
            println!("  complete  h={:6.1} s={:.3} v={:.3}", color.h, color.s, color.v);
        });

    picker.set_layout(Control::Wheel, 250.0, 250.0);
    picker.set_layout(Control::Slider, 300.0, 40.0);

    println!("Initial color: {:?}", picker.color());

    // Drag from the right edge of the wheel up to the top, a quarter turn.
    println!("Wheel drag:");
    let wheel_script = [
        (225.0, 125.0, GesturePhase::Began),
        (207.0, 64.0, GesturePhase::Active),
        (160.0, 28.0, GesturePhase::Active),
        (125.0, 25.0, GesturePhase::Ended),
    ];
    let g = picker.generation();
    for (x, y, phase) in wheel_script {
        picker.handle_gesture(Control::Wheel, g, GestureSample::new(Point::new(x, y), phase));
    }

    // Darken the selection to 40 percent brightness.
    println!("Slider drag:");
    let slider_script = [
        (275.0, 20.0, GesturePhase::Began),
        (190.0, 20.0, GesturePhase::Active),
        (125.0, 20.0, GesturePhase::Ended),
    ];
    let g = picker.generation();
    for (x, y, phase) in slider_script {
        picker.handle_gesture(Control::Slider, g, GestureSample::new(Point::new(x, y), phase));
    }

    let snapshot = picker.snapshot();
    println!("Final color:   {:?}", snapshot.color);
    println!(
        "Preview swatch: #{:02X}{:02X}{:02X}",
        snapshot.preview.r, snapshot.preview.g, snapshot.preview.b
    );

    Ok(())
}
