use sketchdeck_designer::gesture::{ContactChange, GestureFrame, GestureRecognizer};
use sketchdeck_designer::model::Point;
use sketchdeck_designer::viewport::Viewport;

fn start(recognizer: &mut GestureRecognizer, a: Point, b: Point) {
    assert_eq!(recognizer.contact_down(1, a), ContactChange::Single);
    assert_eq!(recognizer.contact_down(2, b), ContactChange::GestureStarted);
}

#[test]
fn test_pinch_out_is_monotonic_and_reversible() {
    let mut recognizer = GestureRecognizer::default();
    let mut viewport = Viewport::default();
    start(&mut recognizer, Point::new(300.0, 200.0), Point::new(400.0, 200.0));

    let mut zooms = vec![viewport.zoom()];
    for step in 1..=5 {
        let spread = 10.0 * step as f64;
        recognizer.contact_move(1, Point::new(300.0 - spread, 200.0), &mut viewport);
        recognizer.contact_move(2, Point::new(400.0 + spread, 200.0), &mut viewport);
        zooms.push(viewport.zoom());
    }
    assert!(zooms.windows(2).all(|w| w[1] > w[0]), "zoom must grow: {:?}", zooms);
    assert!((viewport.zoom() - 2.0).abs() < 1e-9);

    for step in (0..5).rev() {
        let spread = 10.0 * step as f64;
        recognizer.contact_move(1, Point::new(300.0 - spread, 200.0), &mut viewport);
        recognizer.contact_move(2, Point::new(400.0 + spread, 200.0), &mut viewport);
    }
    assert!((viewport.zoom() - 1.0).abs() < 1e-9);
}

#[test]
fn test_pinch_respects_zoom_limits() {
    let mut recognizer = GestureRecognizer::default();
    let mut viewport = Viewport::new(0.5, 2.0);
    start(&mut recognizer, Point::new(0.0, 0.0), Point::new(10.0, 0.0));

    let frame = recognizer.contact_move(2, Point::new(1000.0, 0.0), &mut viewport);
    match frame {
        Some(GestureFrame::Pinch { zoom, .. }) => assert_eq!(zoom, 2.0),
        other => panic!("expected a pinch, got {:?}", other),
    }
    assert_eq!(viewport.zoom(), 2.0);
}

#[test]
fn test_two_finger_drag_pans_viewport() {
    let mut recognizer = GestureRecognizer::default();
    let mut viewport = Viewport::default();
    start(&mut recognizer, Point::new(0.0, 0.0), Point::new(100.0, 0.0));

    recognizer.contact_move(1, Point::new(30.0, 40.0), &mut viewport);
    recognizer.contact_move(2, Point::new(130.0, 40.0), &mut viewport);

    assert_eq!(viewport.zoom(), 1.0);
    assert!((viewport.pan_x() - 30.0).abs() < 1e-9);
    assert!((viewport.pan_y() - 40.0).abs() < 1e-9);
}

#[test]
fn test_moves_without_gesture_do_nothing() {
    let mut recognizer = GestureRecognizer::default();
    let mut viewport = Viewport::default();
    recognizer.contact_down(1, Point::new(0.0, 0.0));

    assert!(recognizer.contact_move(1, Point::new(50.0, 50.0), &mut viewport).is_none());
    assert!(recognizer.contact_move(9, Point::new(50.0, 50.0), &mut viewport).is_none());
    assert_eq!(recognizer.position(1), Some(Point::new(50.0, 50.0)));
    assert_eq!(viewport, Viewport::default());
}

#[test]
fn test_cancel_ends_gesture() {
    let mut recognizer = GestureRecognizer::default();
    start(&mut recognizer, Point::new(0.0, 0.0), Point::new(10.0, 0.0));

    assert_eq!(
        recognizer.cancel_contact(1),
        ContactChange::GestureEnded { remaining: Some(2) }
    );
    assert_eq!(recognizer.live_contacts(), 1);
}
