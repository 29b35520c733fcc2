//! Right-click context menu over a bar chart: open, edit, remove, re-apply.
//!
//! Run with `cargo run --example context_menu_lab`.

use std::cell::RefCell;
use std::rc::Rc;

use chart_conductor::api::{ChartBehavior, ChartController};
use chart_conductor::core::{AxisOption, ChartOption, SeriesEntry, SeriesOption, TitleOption};
use chart_conductor::engine::{RecordingEngine, RecordingLog};
use chart_conductor::events::{
    ChartEvent, ChartEventParams, EventHandlers, MouseButton, NativeEvent, NativeEventRef,
    PointerEventInfo,
};
use chart_conductor::extensions::{ContextMenu, ContextMenuAction};

const PALETTE: [&str; 5] = ["#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de"];

struct MenuModel {
    labels: Vec<String>,
    values: Vec<f64>,
    menu: ContextMenu,
}

fn build_option(labels: &[String], values: &[f64]) -> ChartOption {
    let mut series = SeriesOption::bar("Sales");
    for (index, value) in values.iter().enumerate() {
        series = series.with_entry(SeriesEntry::styled(*value, PALETTE[index % PALETTE.len()]));
    }
    ChartOption::new()
        .with_title(TitleOption::new("Sales with context menu"))
        .with_x_axis(AxisOption::category(labels.iter().cloned()))
        .with_y_axis(AxisOption::value())
        .with_series(series)
}

struct ContextMenuBarChart {
    model: Rc<RefCell<MenuModel>>,
}

impl ChartBehavior<RecordingEngine> for ContextMenuBarChart {
    fn create_option(&mut self) -> ChartOption {
        let model = self.model.borrow();
        build_option(&model.labels, &model.values)
    }

    fn post_initialize(&mut self, chart: &mut ChartController<RecordingEngine>) {
        let open_model = Rc::clone(&self.model);
        let close_model = Rc::clone(&self.model);
        chart.set_event_handlers(
            EventHandlers::new()
                .on_right_click(move |params| {
                    open_model.borrow_mut().menu.open_at(params);
                })
                .on_click(move |_params| {
                    close_model.borrow_mut().menu.close();
                }),
        );
    }

    fn on_dispose(&mut self, _chart: &mut ChartController<RecordingEngine>) {
        self.model.borrow_mut().menu.close();
    }
}

struct LoggedNativeEvent;

impl NativeEvent for LoggedNativeEvent {
    fn prevent_default(&self) {
        println!("(platform default context menu suppressed)");
    }
}

fn right_click(entry: usize, label: &str, value: f64, pointer: PointerEventInfo) -> ChartEventParams {
    ChartEventParams::new(ChartEvent::RightClick)
        .with_series(0, "Sales")
        .with_entry(entry, label)
        .with_value(value)
        .with_pointer(pointer)
}

fn main() -> chart_conductor::ChartResult<()> {
    let log = RecordingLog::new();
    let model = Rc::new(RefCell::new(MenuModel {
        labels: ["Product A", "Product B", "Product C", "Product D", "Product E"]
            .iter()
            .map(|label| (*label).to_owned())
            .collect(),
        values: vec![23.0, 45.0, 56.0, 78.0, 32.0],
        menu: ContextMenu::with_default_items(),
    }));

    let mut chart = ChartController::new(ContextMenuBarChart {
        model: Rc::clone(&model),
    });
    chart.init(log.clone())?;

    let pointer = PointerEventInfo::at(412.0, 158.0)
        .with_button(MouseButton::Secondary)
        .with_native(NativeEventRef::new(LoggedNativeEvent));
    chart
        .engine_mut()
        .expect("engine active")
        .emit(right_click(3, "Product D", 78.0, pointer));

    {
        let model = model.borrow();
        if let Some(open) = model.menu.open_state() {
            println!(
                "menu open at ({}, {}) on {:?}",
                open.page_x, open.page_y, open.params.name
            );
            for (index, item) in model.menu.items().iter().enumerate() {
                println!("  [{index}] {}", item.label);
            }
        }
    }

    // "Edit value" on the captured entry, then re-apply the document.
    let activation = model.borrow_mut().menu.activate(1);
    if let Some((ContextMenuAction::EditValue, params)) = activation {
        if let Some(index) = params.data_index {
            let option = {
                let mut model = model.borrow_mut();
                model.values[index] = 88.0;
                build_option(&model.labels, &model.values)
            };
            chart.set_option(option);
            println!("edited entry {index}");
        }
    }

    // Remove the first bar through the same flow.
    let pointer = PointerEventInfo::at(96.0, 143.0).with_button(MouseButton::Secondary);
    chart
        .engine_mut()
        .expect("engine active")
        .emit(right_click(0, "Product A", 23.0, pointer));
    let activation = model.borrow_mut().menu.activate(3);
    if let Some((ContextMenuAction::RemoveEntry, params)) = activation {
        if let Some(index) = params.data_index {
            let option = {
                let mut model = model.borrow_mut();
                model.labels.remove(index);
                model.values.remove(index);
                build_option(&model.labels, &model.values)
            };
            chart.set_option(option);
            println!("removed entry {index}");
        }
    }

    println!(
        "applied document now:\n{}",
        log.applied_option().expect("option applied").to_json_pretty()?
    );
    chart.dispose();
    Ok(())
}
