//! Tests for row activation and the focus cue.

use std::cell::RefCell;
use std::rc::Rc;

use content_list::prelude::*;
use content_list::RowVisual;

fn entity(id: &str) -> ContentEntity {
    ContentEntity::new(id, "0", id, ContentKind::Audio)
}

fn recorder() -> (Rc<RefCell<Vec<String>>>, ItemListener<ContentEntity>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let listener = ItemListener::new(move |e: &ContentEntity| {
        sink.borrow_mut().push(e.id.clone());
    });
    (seen, listener)
}

#[test]
fn test_click_delivers_bound_entity() {
    let mut adapter = ContentListAdapter::new(DeviceFeatures::touch());
    adapter.add_all(vec![entity("a"), entity("b")]);
    let (clicks, listener) = recorder();
    adapter.set_on_item_click(Some(listener));

    let mut row = adapter.create_row();
    adapter.bind(&mut row, 1);
    assert_eq!(adapter.perform_click(&row), EventResult::Consumed);
    assert_eq!(*clicks.borrow(), vec!["b".to_string()]);
}

#[test]
fn test_long_click_is_consumed() {
    let mut adapter = ContentListAdapter::new(DeviceFeatures::touch());
    adapter.add(entity("a"));
    let (clicks, click_listener) = recorder();
    let (long_clicks, long_listener) = recorder();
    adapter.set_on_item_click(Some(click_listener));
    adapter.set_on_item_long_click(Some(long_listener));

    let mut row = adapter.create_row();
    adapter.bind(&mut row, 0);
    let result = adapter.perform_long_click(&row);
    assert!(result.is_handled());
    assert_eq!(*long_clicks.borrow(), vec!["a".to_string()]);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn test_none_listener_restores_noop() {
    let mut adapter = ContentListAdapter::new(DeviceFeatures::touch());
    adapter.add(entity("a"));
    let (clicks, listener) = recorder();
    adapter.set_on_item_click(Some(listener));
    adapter.set_on_item_click(None);

    let mut row = adapter.create_row();
    adapter.bind(&mut row, 0);
    assert_eq!(adapter.activate(&row, Activation::Primary), EventResult::Consumed);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn test_unbound_row_is_ignored() {
    let adapter: ContentListAdapter<ContentEntity> = ContentListAdapter::default();
    let row = adapter.create_row();
    assert!(row.entity().is_none());
    assert_eq!(adapter.perform_click(&row), EventResult::Ignored);
}

#[test]
fn test_rebind_picks_up_selection() {
    let mut adapter = ContentListAdapter::new(DeviceFeatures::touch());
    adapter.add_all(vec![entity("a"), entity("b")]);
    let mut rows = vec![adapter.create_row(), adapter.create_row()];
    for (index, row) in rows.iter_mut().enumerate() {
        adapter.bind(row, index);
    }
    assert!(rows.iter().all(|row| !row.is_selected()));

    adapter.set_selected(Some(entity("b")));
    for index in adapter.take_invalidated() {
        adapter.bind(&mut rows[index], index);
    }
    assert!(!rows[0].is_selected());
    assert!(rows[1].is_selected());

    let model = rows[1].model().expect("row is bound");
    assert!(model.selected);
    assert_eq!(model.title, "b");
}

#[test]
fn test_focus_cue_on_focus_navigated_device() {
    let config = ListConfig::new().focus_scale(1.25).focus_elevation(8.0);
    let adapter: ContentListAdapter<ContentEntity> =
        ContentListAdapter::with_config(DeviceFeatures::focus_navigated(), config);
    let mut row = adapter.create_row();
    assert!(row.has_focus_affordance());

    assert_eq!(row.on_focus_change(true), EventResult::Consumed);
    assert_eq!(
        row.visual(),
        RowVisual {
            scale_x: 1.25,
            scale_y: 1.25,
            elevation: 8.0,
        }
    );

    row.on_focus_change(false);
    assert_eq!(row.visual(), RowVisual::default());
}

#[test]
fn test_focus_cue_absent_on_touch_device() {
    let adapter: ContentListAdapter<ContentEntity> =
        ContentListAdapter::new(DeviceFeatures::touch());
    let mut row = adapter.create_row();
    assert_eq!(row.on_focus_change(true), EventResult::Ignored);
    assert_eq!(row.visual(), RowVisual::default());
}
