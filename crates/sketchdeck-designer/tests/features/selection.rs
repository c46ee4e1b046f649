use proptest::prelude::*;
use sketchdeck_designer::scene::Scene;
use sketchdeck_designer::{GroupId, InteractionState, Modifiers, MOUSE};

use crate::support::{click, controller_with, drag, p, selected, solid};

fn row() -> Scene {
    Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &[]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &[]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &[]),
    ])
}

#[test]
fn test_click_selects_single_element() {
    let mut c = controller_with(row());
    click(&mut c, p(120.0, 20.0), Modifiers::NONE);
    assert_eq!(selected(&c), vec![2]);
    assert_eq!(c.state(), &InteractionState::Idle);
}

#[test]
fn test_shift_click_adds_and_ctrl_click_isolates() {
    let mut c = controller_with(row());
    click(&mut c, p(20.0, 20.0), Modifiers::NONE);
    click(&mut c, p(120.0, 20.0), Modifiers::shift());
    assert_eq!(selected(&c), vec![1, 2]);

    click(&mut c, p(20.0, 20.0), Modifiers::ctrl());
    assert_eq!(selected(&c), vec![1]);
}

#[test]
fn test_shift_click_on_selected_element_removes_it() {
    let mut c = controller_with(row());
    click(&mut c, p(20.0, 20.0), Modifiers::NONE);
    click(&mut c, p(120.0, 20.0), Modifiers::shift());
    click(&mut c, p(20.0, 20.0), Modifiers::shift());
    assert_eq!(selected(&c), vec![2]);
}

#[test]
fn test_click_on_empty_space_clears() {
    let mut c = controller_with(row());
    click(&mut c, p(20.0, 20.0), Modifiers::NONE);
    click(&mut c, p(20.0, 300.0), Modifiers::NONE);
    assert!(c.selection().is_empty());
}

#[test]
fn test_redundant_clicks_do_not_grow_history() {
    let mut c = controller_with(row());
    let start = c.history().len();

    click(&mut c, p(20.0, 300.0), Modifiers::NONE);
    assert_eq!(c.history().len(), start);

    click(&mut c, p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(c.history().len(), start + 1);

    click(&mut c, p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(c.history().len(), start + 1);
}

#[test]
fn test_click_on_grouped_element_selects_group() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["g"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["g"]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &[]),
    ]);
    let mut c = controller_with(scene);
    click(&mut c, p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(selected(&c), vec![1, 2]);
    assert!(c.selection().group_ids.contains(&GroupId::from("g")));
}

#[test]
fn test_double_click_enters_groups_one_level_at_a_time() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &["outer"]),
    ]);
    let mut c = controller_with(scene);

    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("outer")));
    assert_eq!(selected(&c), vec![1, 2, 3]);

    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("inner")));
    assert_eq!(selected(&c), vec![1, 2]);

    // inside the inner group a click picks single elements
    click(&mut c, p(70.0, 20.0), Modifiers::NONE);
    click(&mut c, p(120.0, 20.0), Modifiers::NONE);
    assert_eq!(selected(&c), vec![2]);
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("inner")));
}

#[test]
fn test_double_click_selects_every_direct_unit_of_entered_group() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &["outer"]),
        solid(4, 300.0, 0.0, 40.0, 40.0, &[]),
    ]);
    let mut c = controller_with(scene);
    click(&mut c, p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(selected(&c), vec![1, 2, 3]);

    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("outer")));
    assert_eq!(selected(&c), vec![1, 2, 3]);
    assert!(c.selection().group_ids.contains(&GroupId::from("inner")));
    assert!(!c.selection().group_ids.contains(&GroupId::from("outer")));
}

#[test]
fn test_click_outside_editing_group_leaves_it() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["g"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["g"]),
        solid(3, 0.0, 200.0, 40.0, 40.0, &[]),
    ]);
    let mut c = controller_with(scene);
    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);
    assert!(c.selection().editing_group_id.is_some());

    click(&mut c, p(20.0, 220.0), Modifiers::NONE);
    assert_eq!(selected(&c), vec![3]);
    assert_eq!(c.selection().editing_group_id, None);
}

#[test]
fn test_empty_click_far_from_editing_group_resets_it() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["g"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["g"]),
    ]);
    let mut c = controller_with(scene);
    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);

    // between the members: still inside the group's box
    click(&mut c, p(70.0, 20.0), Modifiers::NONE);
    assert!(c.selection().is_empty());
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("g")));

    click(&mut c, p(70.0, 400.0), Modifiers::NONE);
    assert_eq!(c.selection().editing_group_id, None);
}

#[test]
fn test_marquee_selects_enclosed_units() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &[]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["g"]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &["g"]),
    ]);
    let mut c = controller_with(scene);

    drag(&mut c, p(-10.0, -10.0), p(150.0, 60.0), Modifiers::NONE);
    // the group is only partly enclosed but counts as one unit
    assert_eq!(selected(&c), vec![1, 2, 3]);

    click(&mut c, p(500.0, 500.0), Modifiers::NONE);
    drag(&mut c, p(-10.0, -10.0), p(60.0, 60.0), Modifiers::NONE);
    assert_eq!(selected(&c), vec![1]);
}

#[test]
fn test_shift_marquee_adds_to_selection() {
    let mut c = controller_with(row());
    click(&mut c, p(220.0, 20.0), Modifiers::NONE);
    drag(&mut c, p(-10.0, -10.0), p(60.0, 60.0), Modifiers::shift());
    assert_eq!(selected(&c), vec![1, 3]);
}

#[test]
fn test_marquee_is_one_history_entry() {
    let mut c = controller_with(row());
    let start = c.history().len();
    c.dispatch_pointer_down(p(-10.0, -10.0), Modifiers::NONE, MOUSE);
    for step in 1..10 {
        let at = p(step as f64 * 30.0, 60.0);
        c.dispatch_pointer_move(at, Modifiers::NONE, MOUSE);
        assert!(c.state().marquee().is_some());
    }
    c.dispatch_pointer_up(p(270.0, 60.0), Modifiers::NONE, MOUSE);
    assert_eq!(selected(&c), vec![1, 2, 3]);
    assert_eq!(c.history().len(), start + 1);
}

#[test]
fn test_select_all_and_clear() {
    let mut c = controller_with(row());
    assert!(c.select_all());
    assert_eq!(selected(&c), vec![1, 2, 3]);
    assert!(!c.select_all());
    assert!(c.clear_selection());
    assert!(c.selection().is_empty());
}

#[test]
fn test_select_elements_rejects_unknown_ids() {
    let mut c = controller_with(row());
    assert!(c.select_elements(&[1, 3]).unwrap());
    assert!(c.select_elements(&[1, 99]).is_err());
    assert_eq!(selected(&c), vec![1, 3]);
}

/// Points midway between the edges of the stacked boxes below, so no press
/// lands within hit tolerance of an outline.
const LANES: [f64; 7] = [-15.0, 15.0, 37.5, 52.5, 67.5, 82.5, 105.0];

proptest! {
    #[test]
    fn prop_plain_click_selects_topmost_solid(xi in 0usize..7, yi in 0usize..7, dx in -1.0f64..1.0, dy in -1.0f64..1.0) {
        let (x, y) = (LANES[xi] + dx, LANES[yi] + dy);
        let scene = Scene::from_elements([
            solid(1, 0.0, 0.0, 60.0, 60.0, &[]),
            solid(2, 30.0, 30.0, 60.0, 60.0, &[]),
            solid(3, 45.0, 45.0, 30.0, 30.0, &[]),
        ]);
        let expected = [(3u64, 45.0, 75.0), (2, 30.0, 90.0), (1, 0.0, 60.0)]
            .iter()
            .find(|(_, lo, hi)| x > *lo && x < *hi && y > *lo && y < *hi)
            .map(|(id, _, _)| *id);

        let mut c = controller_with(scene);
        click(&mut c, p(x, y), Modifiers::NONE);
        match expected {
            Some(id) => prop_assert_eq!(selected(&c), vec![id]),
            None => prop_assert!(c.selection().is_empty()),
        }
    }
}
