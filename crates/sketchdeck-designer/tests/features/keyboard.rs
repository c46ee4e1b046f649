use sketchdeck_designer::scene::Scene;
use sketchdeck_designer::{GroupId, KeyCode, Modifiers};

use crate::support::{controller_with, min_corner, p, selected, solid};

fn scene() -> Scene {
    Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &["outer"]),
        solid(4, 300.0, 0.0, 40.0, 40.0, &[]),
    ])
}

#[test]
fn test_arrow_keys_nudge_selection() {
    let mut c = controller_with(scene());
    c.select_elements(&[4]).unwrap();

    c.dispatch_key(KeyCode::ArrowRight, Modifiers::NONE);
    c.dispatch_key(KeyCode::ArrowDown, Modifiers::shift());
    assert_eq!(min_corner(&c, 4), p(301.0, 10.0));

    // each nudge is its own entry
    assert_eq!(c.history().labels(), vec!["Initial", "Select", "Move", "Move"]);
}

#[test]
fn test_nudge_without_selection_is_ignored() {
    let mut c = controller_with(scene());
    c.dispatch_key(KeyCode::ArrowLeft, Modifiers::NONE);
    assert_eq!(c.history().len(), 1);
}

#[test]
fn test_delete_key_tombstones_selection() {
    let mut c = controller_with(scene());
    c.select_elements(&[3, 4]).unwrap();
    c.dispatch_key(KeyCode::Delete, Modifiers::NONE);

    assert_eq!(c.scene().len(), 4);
    assert_eq!(c.scene().live_count(), 2);
    assert!(c.scene().get(3).is_some_and(|e| e.is_deleted));
    assert!(c.selection().is_empty());

    assert!(c.undo());
    assert_eq!(c.scene().live_count(), 4);
    assert_eq!(selected(&c), vec![3, 4]);
}

#[test]
fn test_escape_walks_out_of_groups() {
    let mut c = controller_with(scene());
    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);
    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("inner")));

    c.dispatch_key(KeyCode::Escape, Modifiers::NONE);
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("outer")));
    assert_eq!(selected(&c), vec![1, 2]);
    assert!(c.selection().group_ids.contains(&GroupId::from("inner")));

    c.dispatch_key(KeyCode::Escape, Modifiers::NONE);
    assert_eq!(c.selection().editing_group_id, None);
    assert_eq!(selected(&c), vec![1, 2, 3]);

    c.dispatch_key(KeyCode::Escape, Modifiers::NONE);
    assert!(c.selection().is_empty());
}
