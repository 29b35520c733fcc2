//! Click-to-select bar chart driven headlessly through the recording engine.
//!
//! Run with `cargo run --example bar_interaction_lab`.

use std::cell::RefCell;
use std::rc::Rc;

use chart_conductor::api::{ChartBehavior, ChartController, format_number};
use chart_conductor::core::{AxisOption, ChartOption, SeriesOption, TitleOption, TooltipOption};
use chart_conductor::engine::{RecordingEngine, RecordingLog};
use chart_conductor::events::{ChartEvent, ChartEventParams, EventHandlers};

const PRODUCTS: [&str; 5] = [
    "Product A",
    "Product B",
    "Product C",
    "Product D",
    "Product E",
];
const SALES: [f64; 5] = [23.0, 45.0, 56.0, 78.0, 32.0];

struct BarChart {
    selected: Rc<RefCell<Option<String>>>,
}

impl ChartBehavior<RecordingEngine> for BarChart {
    fn create_option(&mut self) -> ChartOption {
        ChartOption::new()
            .with_title(TitleOption::new("Sales by product").centered())
            .with_tooltip(TooltipOption::new())
            .with_x_axis(AxisOption::category(PRODUCTS))
            .with_y_axis(AxisOption::value())
            .with_series(SeriesOption::bar("Sales").with_values(SALES))
    }

    fn post_initialize(&mut self, chart: &mut ChartController<RecordingEngine>) {
        let selected = Rc::clone(&self.selected);
        chart.set_event_handlers(EventHandlers::new().on_click(move |params| {
            *selected.borrow_mut() = params.name.clone();
        }));
    }
}

fn main() -> chart_conductor::ChartResult<()> {
    let log = RecordingLog::new();
    let selected = Rc::new(RefCell::new(None));
    let mut chart = ChartController::new(BarChart {
        selected: Rc::clone(&selected),
    });

    chart.init(log.clone())?;
    println!(
        "applied document:\n{}",
        log.applied_option().expect("option applied").to_json_pretty()?
    );

    let click = ChartEventParams::new(ChartEvent::Click)
        .with_series(0, "Sales")
        .with_entry(2, PRODUCTS[2])
        .with_value(SALES[2]);
    chart.engine_mut().expect("engine active").emit(click);

    match selected.borrow().as_deref() {
        Some(name) => println!("selected entry: {name}"),
        None => println!("no selection"),
    }
    println!(
        "total sales: {}",
        format_number(SALES.iter().sum::<f64>(), 0)
    );

    chart.highlight(Some(0), Some(2));
    chart.resize();
    chart.dispose();
    println!("actions recorded: {:?}", log.actions());
    Ok(())
}
