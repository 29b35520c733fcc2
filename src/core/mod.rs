mod option;

pub use option::{
    AxisKind, AxisOption, ChartOption, ItemStyle, SeriesEntry, SeriesKind, SeriesOption,
    TitleOption, TooltipOption, TooltipTrigger,
};
