use sketchdeck_designer::model::Point;
use sketchdeck_designer::viewport::Viewport;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::default();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}

#[test]
fn test_reversed_range_is_swapped() {
    let vp = Viewport::new(4.0, 0.25);
    assert_eq!(vp.zoom_range(), (0.25, 4.0));
    assert_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_positive_y_goes_down() {
    let vp = Viewport::default();
    let top = vp.world_to_screen(Point::new(0.0, 0.0));
    let lower = vp.world_to_screen(Point::new(0.0, 100.0));
    assert!(lower.y > top.y);
}

#[test]
fn test_pan_by_moves_world_under_cursor() {
    let mut vp = Viewport::default();
    vp.pan_by(50.0, -20.0);
    let world = vp.screen_to_world(Point::new(50.0, -20.0));
    assert_eq!(world, Point::new(0.0, 0.0));
}

#[test]
fn test_world_distance_shrinks_with_zoom() {
    let mut vp = Viewport::default();
    vp.set_zoom(4.0);
    assert_eq!(vp.screen_to_world_distance(8.0), 2.0);
}

#[test]
fn test_reset_viewport() {
    let mut vp = Viewport::default();
    vp.set_zoom(3.0);
    vp.set_pan(10.0, 10.0);
    vp.reset();
    assert_eq!(vp, Viewport::default());
}

#[test]
fn test_display() {
    let mut vp = Viewport::default();
    vp.set_zoom(1.5);
    vp.set_pan(2.0, 3.0);
    assert_eq!(vp.to_string(), "Zoom: 1.50x | Pan: (2.0, 3.0)");
}
