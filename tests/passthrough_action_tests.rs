use chart_conductor::api::ChartController;
use chart_conductor::core::ChartOption;
use chart_conductor::engine::{ChartAction, LoadingKind, LoadingOptions, RecordingEngine, RecordingLog};
use serde_json::json;

fn active_chart(log: &RecordingLog) -> ChartController<RecordingEngine> {
    let mut chart: ChartController<RecordingEngine> =
        ChartController::with_option(ChartOption::new());
    chart.init(log.clone()).expect("init");
    chart
}

#[test]
fn highlight_and_downplay_dispatch_to_the_engine() {
    let log = RecordingLog::new();
    let mut chart = active_chart(&log);

    chart.highlight(Some(1), Some(2));
    chart.downplay(Some(1), None);

    assert_eq!(
        log.actions(),
        vec![
            ChartAction::Highlight {
                series_index: Some(1),
                data_index: Some(2),
            },
            ChartAction::Downplay {
                series_index: Some(1),
                data_index: None,
            },
        ]
    );
}

#[test]
fn tip_actions_dispatch_to_the_engine() {
    let log = RecordingLog::new();
    let mut chart = active_chart(&log);

    chart.show_tip(0, 3);
    chart.hide_tip();

    assert_eq!(
        log.actions(),
        vec![
            ChartAction::ShowTip {
                series_index: 0,
                data_index: 3,
            },
            ChartAction::HideTip,
        ]
    );
}

#[test]
fn loading_toggles_reach_the_engine() {
    let log = RecordingLog::new();
    let mut chart = active_chart(&log);

    chart.show_loading(
        LoadingKind::Default,
        LoadingOptions::default().with_text("fetching"),
    );
    let (kind, options) = log.loading().expect("loading shown");
    assert_eq!(kind, LoadingKind::Default);
    assert_eq!(options.text, "fetching");
    assert!(options.show_spinner);

    chart.hide_loading();
    assert!(log.loading().is_none());
}

#[test]
fn resize_is_counted_per_call() {
    let log = RecordingLog::new();
    let mut chart = active_chart(&log);

    chart.resize();
    chart.resize();

    assert_eq!(log.resize_count(), 2);
}

#[test]
fn action_json_contract_uses_camel_case_tags() {
    let show_tip = ChartAction::ShowTip {
        series_index: 1,
        data_index: 2,
    };
    assert_eq!(
        serde_json::to_value(show_tip).expect("serialize"),
        json!({"type": "showTip", "seriesIndex": 1, "dataIndex": 2})
    );

    assert_eq!(
        serde_json::to_value(ChartAction::HideTip).expect("serialize"),
        json!({"type": "hideTip"})
    );

    let highlight = ChartAction::Highlight {
        series_index: None,
        data_index: Some(4),
    };
    assert_eq!(
        serde_json::to_value(highlight).expect("serialize"),
        json!({"type": "highlight", "seriesIndex": null, "dataIndex": 4})
    );
}
