use proptest::prelude::*;
use sketchdeck_designer::element::{Element, Style};
use sketchdeck_designer::history::History;
use sketchdeck_designer::model::{DesignRectangle, Shape};
use sketchdeck_designer::scene::Scene;
use sketchdeck_designer::selection::Selection;

fn rect(id: u64, x: f64) -> Element {
    Element::new(
        id,
        Shape::Rectangle(DesignRectangle::new(x, 0.0, 10.0, 10.0)),
        Style::solid("#b2f2bb"),
    )
}

fn selected(ids: &[u64]) -> Selection {
    let mut selection = Selection::new();
    selection.element_ids.extend(ids.iter().copied());
    selection
}

#[test]
fn test_history_creation() {
    let history = History::new(Scene::new(), Selection::new(), 50);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.len(), 1);
    assert_eq!(history.labels(), vec!["Initial"]);
}

#[test]
fn test_record_single_action() {
    let mut history = History::new(Scene::new(), Selection::new(), 50);
    let scene = Scene::from_elements([rect(1, 0.0)]);

    assert!(history.record(&scene, &Selection::new(), "Create rectangle"));
    assert!(history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn test_record_identical_state_is_noop() {
    let scene = Scene::from_elements([rect(1, 0.0)]);
    let mut history = History::new(scene.clone(), selected(&[1]), 50);

    assert!(!history.record(&scene, &selected(&[1]), "Select"));
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_selection_change_alone_is_recorded() {
    let scene = Scene::from_elements([rect(1, 0.0)]);
    let mut history = History::new(scene.clone(), Selection::new(), 50);

    assert!(history.record(&scene, &selected(&[1]), "Select"));
    assert_eq!(history.len(), 2);
}

#[test]
fn test_equal_fields_with_different_ids_are_not_equal() {
    let mut history = History::new(Scene::from_elements([rect(1, 0.0)]), Selection::new(), 50);
    assert!(history.record(&Scene::from_elements([rect(2, 0.0)]), &Selection::new(), "Replace"));
}

#[test]
fn test_undo_redo_returns_snapshots() {
    let mut history = History::new(Scene::new(), Selection::new(), 50);
    let one = Scene::from_elements([rect(1, 0.0)]);
    history.record(&one, &selected(&[1]), "Create");

    let undone = history.undo().expect("undo");
    assert!(undone.snapshot.scene.is_empty());
    assert!(undone.snapshot.selection.is_empty());
    assert!(history.can_redo());

    let redone = history.redo().expect("redo");
    assert_eq!(redone.snapshot.scene, one);
    assert_eq!(redone.label, "Create");
    assert!(!history.can_redo());
}

#[test]
fn test_undo_past_start_returns_none() {
    let mut history = History::new(Scene::new(), Selection::new(), 50);
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn test_record_after_undo_discards_redo_branch() {
    let mut history = History::new(Scene::new(), Selection::new(), 50);
    history.record(&Scene::from_elements([rect(1, 0.0)]), &Selection::new(), "A");
    history.record(&Scene::from_elements([rect(1, 0.0), rect(2, 20.0)]), &Selection::new(), "B");

    history.undo();
    assert_eq!(history.redo_depth(), 1);

    history.record(&Scene::from_elements([rect(1, 0.0), rect(3, 40.0)]), &Selection::new(), "C");
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.labels(), vec!["Initial", "A", "C"]);
}

#[test]
fn test_max_entries_drops_oldest() {
    let mut history = History::new(Scene::new(), Selection::new(), 3);
    let mut elements = Vec::new();
    for i in 0..5 {
        elements.push(rect(i, i as f64 * 20.0));
        history.record(&Scene::from_elements(elements.clone()), &Selection::new(), &format!("Create {}", i));
    }

    assert_eq!(history.len(), 3);
    assert_eq!(history.undo_depth(), 2);
    assert_eq!(history.labels(), vec!["Create 2", "Create 3", "Create 4"]);
}

#[test]
fn test_reset_history() {
    let mut history = History::new(Scene::new(), Selection::new(), 10);
    history.record(&Scene::from_elements([rect(1, 0.0)]), &Selection::new(), "Create");

    history.reset(Scene::new(), Selection::new());
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
    assert_eq!(history.max_entries(), 10);
}

proptest! {
    #[test]
    fn prop_undo_then_redo_is_identity(count in 1usize..12, undos in 0usize..12) {
        let mut history = History::new(Scene::new(), Selection::new(), 100);
        let mut elements = Vec::new();
        for i in 0..count {
            elements.push(rect(i as u64, i as f64 * 15.0));
            let ids: Vec<u64> = elements.iter().map(|e| e.id).collect();
            history.record(&Scene::from_elements(elements.clone()), &selected(&ids), "Create");
        }
        let before = history.current().snapshot.clone();

        let undos = undos.min(count);
        for _ in 0..undos {
            prop_assert!(history.undo().is_some());
        }
        for _ in 0..undos {
            prop_assert!(history.redo().is_some());
        }
        prop_assert_eq!(&history.current().snapshot, &before);
        prop_assert_eq!(history.len(), count + 1);
    }
}
