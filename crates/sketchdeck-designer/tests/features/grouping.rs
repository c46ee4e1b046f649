use std::collections::{BTreeMap, BTreeSet};

use sketchdeck_designer::scene::Scene;
use sketchdeck_designer::{DesignerError, GroupId, InteractionSettings, Modifiers, Tool};

use crate::support::{chain, click, controller, controller_with, create, drag, p, selected, solid};

#[test]
fn test_nested_grouping_appends_inner_group() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &[]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &[]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &[]),
    ]);
    let mut c = controller_with(scene);

    c.select_elements(&[1, 2]).unwrap();
    let g1 = c.group_selection().unwrap();
    c.select_elements(&[1, 3]).unwrap();
    let g2 = c.group_selection().unwrap();

    assert_eq!(chain(&c, 1), vec![g1.clone(), g2.clone()]);
    assert_eq!(chain(&c, 2), vec![g1]);
    assert_eq!(chain(&c, 3), vec![g2.clone()]);
    assert!(c.selection().group_ids.contains(&g2));
}

#[test]
fn test_grouping_gathers_members_below_topmost() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &[]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &[]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &[]),
        solid(4, 300.0, 0.0, 40.0, 40.0, &[]),
    ]);
    let mut c = controller_with(scene);

    c.select_elements(&[1, 3]).unwrap();
    c.group_selection().unwrap();
    assert_eq!(c.scene().ids(), vec![2, 1, 3, 4]);
}

#[test]
fn test_grouping_needs_two_elements() {
    let mut c = controller_with(Scene::from_elements([solid(1, 0.0, 0.0, 40.0, 40.0, &[])]));
    c.select_elements(&[1]).unwrap();
    let before = c.history().len();

    assert!(matches!(
        c.group_selection(),
        Err(DesignerError::SelectionTooSmall { required: 2, found: 1 })
    ));
    assert_eq!(c.history().len(), before);
}

#[test]
fn test_ungroup_removes_innermost_shared_group() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["outer", "inner"]),
        solid(3, 200.0, 0.0, 40.0, 40.0, &["outer"]),
    ]);
    let mut c = controller_with(scene);
    c.select_elements(&[1, 2]).unwrap();

    let removed = c.ungroup_selection().unwrap();
    assert_eq!(removed, vec![GroupId::from("inner")]);
    assert_eq!(chain(&c, 1), vec![GroupId::from("outer")]);
    assert_eq!(chain(&c, 3), vec![GroupId::from("outer")]);
}

#[test]
fn test_ungroup_editing_group_resets_editing() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["g"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["g"]),
    ]);
    let mut c = controller_with(scene);
    c.dispatch_double_click(p(20.0, 20.0), Modifiers::NONE);
    c.select_all();
    assert_eq!(c.selection().editing_group_id, Some(GroupId::from("g")));

    c.ungroup_selection().unwrap();
    assert_eq!(c.selection().editing_group_id, None);
    assert!(chain(&c, 1).is_empty());
}

#[test]
fn test_ungroup_without_groups_fails() {
    let mut c = controller_with(Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &[]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &[]),
    ]));
    assert!(matches!(c.ungroup_selection(), Err(DesignerError::EmptySelection)));
    c.select_all();
    assert!(matches!(c.ungroup_selection(), Err(DesignerError::NotGrouped)));
}

#[test]
fn test_create_group_and_alt_duplicate() {
    let mut c = controller();
    let r1 = create(&mut c, Tool::Rectangle, p(10.0, 10.0), p(20.0, 20.0));
    let r2 = create(&mut c, Tool::Rectangle, p(10.0, -10.0), p(20.0, 10.0));
    assert_eq!(c.tool(), Tool::Select);

    click(&mut c, p(15.0, 18.0), Modifiers::NONE);
    click(&mut c, p(15.0, -2.0), Modifiers::shift());
    assert_eq!(selected(&c), vec![r1, r2]);

    let group = c.group_selection().unwrap();
    assert_eq!(chain(&c, r1), vec![group.clone()]);
    assert_eq!(chain(&c, r2), vec![group.clone()]);

    drag(&mut c, p(15.0, 18.0), p(75.0, 18.0), Modifiers::alt());
    assert_eq!(c.scene().live_count(), 4);

    let mut usage: BTreeMap<GroupId, usize> = BTreeMap::new();
    for element in c.scene().live() {
        assert_eq!(element.group_ids.len(), 1);
        *usage.entry(element.group_ids[0].clone()).or_default() += 1;
    }
    assert_eq!(usage.len(), 2);
    assert!(usage.values().all(|count| *count == 2));

    // the copies moved, the originals stayed
    assert_eq!(crate::support::min_corner(&c, r1), p(10.0, 10.0));
    let copies: BTreeSet<u64> = selected(&c).into_iter().collect();
    assert!(!copies.contains(&r1) && !copies.contains(&r2));
    assert_eq!(c.history().labels().last(), Some(&"Duplicate"));
}

#[test]
fn test_duplicate_of_partial_group_keeps_group_id() {
    let scene = Scene::from_elements([
        solid(1, 0.0, 0.0, 40.0, 40.0, &["g"]),
        solid(2, 100.0, 0.0, 40.0, 40.0, &["g"]),
    ]);
    let mut c = controller_with(scene);
    c.select_elements(&[1]).unwrap();

    drag(&mut c, p(20.0, 20.0), p(20.0, 120.0), Modifiers::alt());
    let copy = selected(&c)[0];
    assert_ne!(copy, 1);
    assert_eq!(chain(&c, copy), vec![GroupId::from("g")]);
    // inserted directly above the original
    assert_eq!(c.scene().ids(), vec![1, copy, 2]);
}

#[test]
fn test_alt_drag_without_duplication_just_moves() {
    let settings = InteractionSettings {
        duplicate_on_alt_drag: false,
        ..InteractionSettings::default()
    };
    let mut c = sketchdeck_designer::InteractionController::with_scene(
        Scene::from_elements([solid(1, 0.0, 0.0, 40.0, 40.0, &[])]),
        settings,
    );
    drag(&mut c, p(20.0, 20.0), p(70.0, 20.0), Modifiers::alt());
    assert_eq!(c.scene().len(), 1);
    assert_eq!(crate::support::min_corner(&c, 1), p(50.0, 0.0));
}
