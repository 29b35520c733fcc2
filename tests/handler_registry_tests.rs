use std::cell::RefCell;
use std::rc::Rc;

use chart_conductor::api::ChartController;
use chart_conductor::core::ChartOption;
use chart_conductor::engine::RecordingEngine;
use chart_conductor::events::{ChartEvent, ChartEventParams, EventHandlers, HandlerRegistry};
use indexmap::IndexMap;

type Log = Rc<RefCell<Vec<&'static str>>>;

fn tagging(log: &Log, tag: &'static str) -> impl Fn(&ChartEventParams) + 'static {
    let log = Rc::clone(log);
    move |_params| log.borrow_mut().push(tag)
}

fn invoke(registry: &HandlerRegistry, event: ChartEvent) {
    let params = ChartEventParams::new(event);
    registry.handler(event).expect("handler registered")(&params);
}

#[test]
fn merge_overrides_only_specified_slots() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = HandlerRegistry::default();

    registry.merge(
        EventHandlers::new()
            .on_click(tagging(&log, "click-a"))
            .on_mouse_over(tagging(&log, "over-a")),
    );
    registry.merge(EventHandlers::new().on_click(tagging(&log, "click-b")));

    assert_eq!(registry.len(), 2);
    invoke(&registry, ChartEvent::Click);
    invoke(&registry, ChartEvent::MouseOver);
    assert_eq!(log.borrow().as_slice(), &["click-b", "over-a"]);
}

#[test]
fn remove_then_reinsert_assigns_fresh_identity() {
    let mut registry = HandlerRegistry::default();

    let first = registry.insert(ChartEvent::Click, Rc::new(|_: &ChartEventParams| {}));
    assert!(registry.remove(ChartEvent::Click));
    assert!(!registry.remove(ChartEvent::Click));
    let second = registry.insert(ChartEvent::Click, Rc::new(|_: &ChartEventParams| {}));

    assert_ne!(first, second);
}

#[test]
fn diff_reports_new_and_stale_kinds() {
    let mut registry = HandlerRegistry::default();
    let click = registry.insert(ChartEvent::Click, Rc::new(|_: &ChartEventParams| {}));
    registry.insert(ChartEvent::MouseOver, Rc::new(|_: &ChartEventParams| {}));
    let stale = registry.insert(ChartEvent::RightClick, Rc::new(|_: &ChartEventParams| {}));
    registry.remove(ChartEvent::RightClick);

    let mut attached = IndexMap::new();
    attached.insert(ChartEvent::Click, click);
    attached.insert(ChartEvent::RightClick, stale);

    let diff = registry.diff_against(&attached);
    assert_eq!(diff.detach.as_slice(), &[ChartEvent::RightClick]);
    assert_eq!(diff.attach.as_slice(), &[ChartEvent::MouseOver]);
    assert!(!diff.is_empty());
}

#[test]
fn replacing_a_handler_detaches_and_reattaches_exactly_that_kind() {
    let mut registry = HandlerRegistry::default();
    let first = registry.insert(ChartEvent::Click, Rc::new(|_: &ChartEventParams| {}));
    registry.insert(ChartEvent::MouseOver, Rc::new(|_: &ChartEventParams| {}));

    let mut attached = IndexMap::new();
    attached.insert(ChartEvent::Click, first);
    attached.insert(
        ChartEvent::MouseOver,
        registry.id_of(ChartEvent::MouseOver).expect("registered"),
    );

    registry.insert(ChartEvent::Click, Rc::new(|_: &ChartEventParams| {}));
    let diff = registry.diff_against(&attached);
    assert_eq!(diff.detach.as_slice(), &[ChartEvent::Click]);
    assert_eq!(diff.attach.as_slice(), &[ChartEvent::Click]);
}

#[test]
fn diff_is_empty_when_attached_matches_registry() {
    let mut registry = HandlerRegistry::default();
    let click = registry.insert(ChartEvent::Click, Rc::new(|_: &ChartEventParams| {}));

    let mut attached = IndexMap::new();
    attached.insert(ChartEvent::Click, click);

    assert!(registry.diff_against(&attached).is_empty());
}

#[test]
fn controller_registry_is_last_write_wins() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let mut chart: ChartController<RecordingEngine> =
        ChartController::with_option(ChartOption::new());

    chart.set_event_handlers(EventHandlers::new().on_click(tagging(&log, "first")));
    chart.add_event_listener(ChartEvent::Click, tagging(&log, "second"));

    let params = ChartEventParams::new(ChartEvent::Click);
    chart.trigger_event(ChartEvent::Click, &params);
    assert_eq!(log.borrow().as_slice(), &["second"]);

    chart.remove_event_listener(ChartEvent::Click);
    chart.trigger_event(ChartEvent::Click, &params);
    assert_eq!(log.borrow().len(), 1);
    assert!(chart.handlers().is_empty());
}

#[test]
fn registered_kinds_keep_registration_order() {
    let mut registry = HandlerRegistry::default();
    registry.insert(ChartEvent::MouseOver, Rc::new(|_: &ChartEventParams| {}));
    registry.insert(ChartEvent::Click, Rc::new(|_: &ChartEventParams| {}));

    let events: Vec<ChartEvent> = registry.events().collect();
    assert_eq!(events, vec![ChartEvent::MouseOver, ChartEvent::Click]);
    assert!(registry.contains(ChartEvent::Click));
    assert!(!registry.contains(ChartEvent::RightClick));
}
