use proptest::prelude::*;
use sketchdeck_designer::scene::Scene;
use sketchdeck_designer::{Modifiers, Tool, MOUSE};

use crate::support::{controller, controller_with, create, min_corner, p, solid};

#[test]
fn test_undo_restores_scene_and_selection() {
    let mut c = controller();
    let r1 = create(&mut c, Tool::Rectangle, p(0.0, 0.0), p(20.0, 20.0));
    let r2 = create(&mut c, Tool::Ellipse, p(50.0, 0.0), p(80.0, 30.0));

    assert!(c.undo());
    assert!(c.scene().get_live(r2).is_none());
    assert!(c.selection().contains(r1));

    assert!(c.redo());
    assert!(c.scene().get_live(r2).is_some());
    assert!(c.selection().contains(r2));
    assert!(!c.redo());
}

#[test]
fn test_new_action_after_undo_drops_redo() {
    let mut c = controller();
    create(&mut c, Tool::Rectangle, p(0.0, 0.0), p(20.0, 20.0));
    create(&mut c, Tool::Rectangle, p(50.0, 0.0), p(70.0, 20.0));
    c.undo();
    assert!(c.can_redo());

    create(&mut c, Tool::Diamond, p(0.0, 50.0), p(20.0, 70.0));
    assert!(!c.can_redo());
    assert_eq!(c.scene().live_count(), 2);
}

#[test]
fn test_undo_mid_drag_cancels_it_first() {
    let mut c = controller_with(Scene::from_elements([solid(1, 0.0, 0.0, 40.0, 40.0, &[])]));
    c.dispatch_key(sketchdeck_designer::KeyCode::ArrowRight, Modifiers::NONE);
    c.select_elements(&[1]).unwrap();
    c.dispatch_key(sketchdeck_designer::KeyCode::ArrowRight, Modifiers::NONE);
    assert_eq!(min_corner(&c, 1), p(1.0, 0.0));

    c.dispatch_pointer_down(p(20.0, 20.0), Modifiers::NONE, MOUSE);
    c.dispatch_pointer_move(p(80.0, 20.0), Modifiers::NONE, MOUSE);
    assert!(c.undo());
    // the drag is gone and the nudge is undone
    assert_eq!(min_corner(&c, 1), p(0.0, 0.0));
    assert!(c.selection().contains(1));
}

#[test]
fn test_undo_on_fresh_controller_does_nothing() {
    let mut c = controller();
    assert!(!c.can_undo());
    assert!(!c.undo());
    assert!(!c.redo());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_undo_redo_round_trip(creates in 1usize..8, undos in 0usize..8) {
        let mut c = controller();
        for i in 0..creates {
            let x = i as f64 * 30.0;
            create(&mut c, Tool::Rectangle, p(x, 0.0), p(x + 20.0, 20.0));
        }
        let scene = c.scene().clone();
        let selection = c.selection().clone();

        let undos = undos.min(creates);
        for _ in 0..undos {
            prop_assert!(c.undo());
        }
        prop_assert_eq!(c.scene().live_count(), creates - undos);
        for _ in 0..undos {
            prop_assert!(c.redo());
        }
        prop_assert_eq!(c.scene(), &scene);
        prop_assert_eq!(c.selection(), &selection);
    }
}
