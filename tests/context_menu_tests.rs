use chart_conductor::events::{ChartEvent, ChartEventParams, MouseButton, PointerEventInfo};
use chart_conductor::extensions::{ContextMenu, ContextMenuAction, ContextMenuItem};

fn right_click_at(page_x: f64, page_y: f64) -> ChartEventParams {
    ChartEventParams::new(ChartEvent::RightClick)
        .with_entry(3, "Product D")
        .with_value(78.0)
        .with_pointer(PointerEventInfo::at(page_x, page_y).with_button(MouseButton::Secondary))
}

#[test]
fn opening_requires_a_pointer_payload() {
    let mut menu = ContextMenu::with_default_items();
    let bare = ChartEventParams::new(ChartEvent::RightClick);

    assert!(!menu.open_at(&bare));
    assert!(!menu.is_open());
}

#[test]
fn opening_captures_position_and_params() {
    let mut menu = ContextMenu::with_default_items();

    assert!(menu.open_at(&right_click_at(412.0, 158.0)));
    let open = menu.open_state().expect("open");
    assert_eq!(open.page_x, 412.0);
    assert_eq!(open.page_y, 158.0);
    assert_eq!(open.params.name.as_deref(), Some("Product D"));
    assert_eq!(open.params.data_index, Some(3));
}

#[test]
fn reopening_replaces_the_captured_state() {
    let mut menu = ContextMenu::with_default_items();
    menu.open_at(&right_click_at(10.0, 10.0));
    menu.open_at(&right_click_at(200.0, 80.0));

    let open = menu.open_state().expect("open");
    assert_eq!(open.page_x, 200.0);
}

#[test]
fn a_failed_open_leaves_existing_state_untouched() {
    let mut menu = ContextMenu::with_default_items();
    menu.open_at(&right_click_at(10.0, 12.0));

    assert!(!menu.open_at(&ChartEventParams::new(ChartEvent::RightClick)));
    assert!(menu.is_open());
    assert_eq!(menu.open_state().expect("open").page_x, 10.0);
}

#[test]
fn activation_returns_the_action_and_closes() {
    let mut menu = ContextMenu::with_default_items();
    menu.open_at(&right_click_at(412.0, 158.0));

    let (action, params) = menu.activate(1).expect("activation");
    assert_eq!(action, ContextMenuAction::EditValue);
    assert_eq!(params.data_index, Some(3));
    assert!(!menu.is_open());
}

#[test]
fn out_of_range_activation_keeps_the_menu_open() {
    let mut menu = ContextMenu::with_default_items();
    menu.open_at(&right_click_at(1.0, 2.0));

    assert!(menu.activate(9).is_none());
    assert!(menu.is_open());
}

#[test]
fn activation_while_closed_returns_none() {
    let mut menu = ContextMenu::with_default_items();
    assert!(menu.activate(0).is_none());
}

#[test]
fn close_is_idempotent() {
    let mut menu = ContextMenu::with_default_items();
    menu.open_at(&right_click_at(1.0, 2.0));
    menu.close();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn default_items_cover_entry_editing() {
    let menu = ContextMenu::with_default_items();
    let actions: Vec<ContextMenuAction> = menu.items().iter().map(|item| item.action).collect();
    assert_eq!(
        actions,
        vec![
            ContextMenuAction::ShowDetail,
            ContextMenuAction::EditValue,
            ContextMenuAction::CopyValue,
            ContextMenuAction::RemoveEntry,
        ]
    );
}

#[test]
fn custom_items_keep_their_order() {
    let menu = ContextMenu::new(vec![
        ContextMenuItem::new("Inspect", ContextMenuAction::ShowDetail),
        ContextMenuItem::new("Drop", ContextMenuAction::RemoveEntry),
    ]);
    assert_eq!(menu.items().len(), 2);
    assert_eq!(menu.items()[1].label, "Drop");
}
