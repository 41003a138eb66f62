//! Drag-to-reorder through an edit session

use pagesmith_editor::{Composition, EditSession, Effect, SlotRect, WidgetId, WidgetType};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn session_with(types: &[WidgetType]) -> (EditSession, Vec<WidgetId>) {
    let mut session = EditSession::new("drag", Composition::new());
    let ids = types.iter().map(|t| session.add_widget(*t)).collect();
    (session, ids)
}

fn recording(session: &mut EditSession) -> Rc<RefCell<Vec<Effect>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    session.subscribe(move |effect: &Effect| sink.borrow_mut().push(effect.clone()));
    log
}

#[test]
fn test_drop_commits_single_reorder() {
    let (mut session, ids) = session_with(&[WidgetType::Hero, WidgetType::Text, WidgetType::Image]);
    let slots = SlotRect::stacked(3, 100.0);
    let levels = session.history().undo_levels();
    let version = session.composition().version;
    let log = recording(&mut session);

    assert!(session.begin_drag(&ids[0]));
    assert_eq!(session.pointer_move(120.0, &slots), Some(0));
    assert_eq!(session.pointer_move(160.0, &slots), Some(1));
    assert_eq!(session.pointer_move(260.0, &slots), Some(2));

    // Nothing committed while hovering
    assert_eq!(session.composition().ids(), ids);
    assert!(log.borrow().is_empty());

    assert!(session.drop_drag());
    assert_eq!(
        session.composition().ids(),
        vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]
    );
    assert_eq!(session.composition().version, version + 1);
    assert_eq!(session.history().undo_levels(), levels + 1);
    assert_eq!(
        log.borrow().iter().filter(|e| matches!(e, Effect::Emit(_))).count(),
        1
    );
    assert!(!session.drag().is_dragging());
}

#[test]
fn test_cancel_leaves_everything_untouched() {
    let (mut session, ids) = session_with(&[WidgetType::Hero, WidgetType::Text, WidgetType::Image]);
    let before = session.records();
    let version = session.composition().version;
    let levels = session.history().undo_levels();
    let log = recording(&mut session);

    assert!(session.begin_drag(&ids[2]));
    session.drag_to(0);
    assert!(session.cancel_drag());

    assert_eq!(session.records(), before);
    assert_eq!(session.composition().version, version);
    assert_eq!(session.history().undo_levels(), levels);
    assert!(log.borrow().is_empty());
    assert!(!session.drop_drag());
}

#[test]
fn test_surface_shows_live_target_and_disables_other_handles() {
    let (mut session, ids) = session_with(&[WidgetType::Hero, WidgetType::Text, WidgetType::Image]);

    session.begin_drag(&ids[0]);
    session.drag_to(2);

    let surface = session.surface();
    let order: Vec<_> = surface.iter().map(|entry| entry.id.clone()).collect();
    assert_eq!(order, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);
    assert_eq!(surface[2].index, 2);

    let enabled: Vec<_> = surface
        .iter()
        .filter(|entry| entry.handle_enabled)
        .map(|entry| entry.id.clone())
        .collect();
    assert_eq!(enabled, vec![ids[0].clone()]);

    // Committed order is unchanged until drop
    assert_eq!(session.composition().ids(), ids);

    session.cancel_drag();
    assert!(session.surface().iter().all(|entry| entry.handle_enabled));
}

#[test]
fn test_second_drag_is_refused() {
    let (mut session, ids) = session_with(&[WidgetType::Hero, WidgetType::Text]);

    assert!(session.begin_drag(&ids[0]));
    assert!(!session.begin_drag(&ids[1]));
    assert_eq!(session.drag().dragged(), Some(&ids[0]));
}

#[test]
fn test_drag_of_missing_widget_is_refused() {
    let (mut session, _) = session_with(&[WidgetType::Hero]);

    assert!(!session.begin_drag(&WidgetId::from("ghost")));
    assert!(!session.drag().is_dragging());
}

#[test]
fn test_drop_in_place_changes_nothing() {
    let (mut session, ids) = session_with(&[WidgetType::Hero, WidgetType::Text]);
    let version = session.composition().version;

    session.begin_drag(&ids[1]);
    assert!(!session.drop_drag());

    assert_eq!(session.composition().ids(), ids);
    assert_eq!(session.composition().version, version);
}

#[test]
fn test_drag_reorder_undoes() {
    let (mut session, ids) = session_with(&[WidgetType::Hero, WidgetType::Text, WidgetType::Image]);

    session.begin_drag(&ids[2]);
    session.drag_to(0);
    session.drop_drag();
    assert_eq!(session.composition().ids()[0], ids[2]);

    assert!(session.undo());
    assert_eq!(session.composition().ids(), ids);
}
