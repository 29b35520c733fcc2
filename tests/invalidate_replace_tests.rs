use chart_conductor::api::ChartController;
use chart_conductor::core::{AxisOption, ChartOption, SeriesOption, TitleOption};
use chart_conductor::engine::{RecordingEngine, RecordingLog};

fn sales_document() -> ChartOption {
    ChartOption::new()
        .with_title(TitleOption::new("Sales"))
        .with_x_axis(AxisOption::category(["A", "B", "C"]))
        .with_y_axis(AxisOption::value())
        .with_series(SeriesOption::bar("Sales").with_values([23.0, 45.0, 56.0]))
}

#[test]
fn invalidate_reapplies_the_current_document() {
    let log = RecordingLog::new();
    let mut chart: ChartController<RecordingEngine> =
        ChartController::with_option(sales_document());
    chart.init(log.clone()).expect("init");
    assert_eq!(log.apply_count(), 1);

    chart.invalidate();

    assert_eq!(log.apply_count(), 2);
    assert_eq!(log.applied_option(), Some(sales_document()));
}

#[test]
fn set_option_replaces_applied_state_wholesale() {
    let log = RecordingLog::new();
    let mut chart: ChartController<RecordingEngine> =
        ChartController::with_option(sales_document());
    chart.init(log.clone()).expect("init");

    let replacement =
        ChartOption::new().with_series(SeriesOption::line("Costs").with_values([9.0, 8.0]));
    chart.set_option(replacement.clone());

    let applied = log.applied_option().expect("document applied");
    // previously applied title/axes/series are gone, not merged
    assert_eq!(applied, replacement);
    assert!(applied.title.is_none());
    assert!(applied.x_axis.is_none());
    let names: Vec<&str> = applied
        .series
        .iter()
        .map(|series| series.name.as_str())
        .collect();
    assert_eq!(names, vec!["Costs"]);
}

#[test]
fn invalidate_before_init_is_ignored() {
    let log = RecordingLog::new();
    let mut chart: ChartController<RecordingEngine> =
        ChartController::with_option(sales_document());

    chart.invalidate();
    assert_eq!(log.apply_count(), 0);

    chart.init(log.clone()).expect("init");
    assert_eq!(log.apply_count(), 1);
}

#[test]
fn set_option_before_init_is_superseded_by_the_behavior_document() {
    let log = RecordingLog::new();
    let mut chart: ChartController<RecordingEngine> =
        ChartController::with_option(sales_document());

    chart.set_option(ChartOption::new().with_title(TitleOption::new("Early")));
    assert_eq!(log.apply_count(), 0);

    chart.init(log.clone()).expect("init");
    assert_eq!(log.applied_option(), Some(sales_document()));
}

#[test]
fn controller_keeps_the_document_it_applied() {
    let log = RecordingLog::new();
    let mut chart: ChartController<RecordingEngine> =
        ChartController::with_option(sales_document());
    chart.init(log.clone()).expect("init");

    assert_eq!(chart.option(), Some(&sales_document()));
}
