use sketchpad::Sketchpad;
use sketchpad::draw::Color;
use sketchpad::export::{SaveConfig, save_drawing};
use sketchpad::input::{MouseButton, Tool};
use tempfile::TempDir;

const WIDTH: usize = 120;

fn make_pad() -> Sketchpad {
    let black = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    Sketchpad::new(WIDTH as i32, 90, black, 5.0).unwrap()
}

fn pixel_at(pixels: &[u32], x: usize, y: usize) -> u32 {
    pixels[y * WIDTH + x]
}

#[test]
fn draw_undo_export_story() {
    let temp = TempDir::new().unwrap();
    let mut pad = make_pad();

    // Three horizontal strokes on separate rows
    for y in [20.0, 50.0, 80.0] {
        pad.on_mouse_press(MouseButton::Left, 10.0, y);
        pad.on_mouse_motion(110.0, y);
        pad.on_mouse_release(MouseButton::Left);
    }

    // Undo restores the snapshot taken when the last stroke started, which
    // itself only holds the first stroke
    pad.undo();

    let pixels = pad.pixels();
    assert_ne!(pixel_at(&pixels, 60, 20), 0, "first stroke survives undo");
    assert_eq!(pixel_at(&pixels, 60, 50), 0);
    assert_eq!(pixel_at(&pixels, 60, 80), 0);

    let config = SaveConfig {
        directory: temp.path().to_path_buf(),
        ..SaveConfig::default()
    };
    let data = pad.to_png().unwrap();
    let path = save_drawing(&data, &config).unwrap();

    assert!(path.ends_with("myDrawing.png"));
    assert_eq!(std::fs::read(&path).unwrap(), data);
}

#[test]
fn rect_drag_outlines_the_dragged_extents() {
    let mut pad = make_pad();
    pad.set_tool(Tool::Rect);

    pad.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    pad.on_mouse_motion(50.0, 30.0);
    pad.on_mouse_release(MouseButton::Left);

    let pixels = pad.pixels();
    // Outline passes through the press corner and the edges
    assert_ne!(pixel_at(&pixels, 10, 10), 0);
    assert_ne!(pixel_at(&pixels, 30, 10), 0);
    assert_ne!(pixel_at(&pixels, 50, 30), 0);
    // The interior stays untouched
    assert_eq!(pixel_at(&pixels, 30, 20), 0);
}

#[test]
fn circle_radius_is_distance_from_press_to_cursor() {
    let mut pad = make_pad();
    pad.set_tool(Tool::Circle);

    // Drag 3 across, 4 down: radius 5
    pad.on_mouse_press(MouseButton::Left, 60.0, 45.0);
    pad.on_mouse_motion(63.0, 49.0);
    pad.on_mouse_release(MouseButton::Left);

    let pixels = pad.pixels();
    assert_ne!(pixel_at(&pixels, 65, 45), 0);
    assert_ne!(pixel_at(&pixels, 55, 45), 0);
    assert_ne!(pixel_at(&pixels, 60, 50), 0);
    // The ring never reaches the center
    assert_eq!(pixel_at(&pixels, 60, 45), 0);
}
