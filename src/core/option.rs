use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Declarative description of what the chart engine should render.
///
/// The document is a value: the controller applies it wholesale and enforces
/// no invariants beyond present/absent. Named fields cover the common
/// title/tooltip/axes/series shape; anything else an engine understands goes
/// through the flattened `extra` map, which survives JSON round trips with
/// insertion order intact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesOption>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ChartOption {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: TitleOption) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipOption) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisOption) -> Self {
        self.x_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisOption) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Appends one series to the document.
    #[must_use]
    pub fn with_series(mut self, series: SeriesOption) -> Self {
        self.series.push(series);
        self
    }

    /// Sets an engine-specific field the typed model does not name.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Serializes the document to the engine's camelCase JSON contract.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidOption(format!("failed to serialize document: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidOption(format!("failed to parse document: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleOption {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
}

impl TitleOption {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            left: None,
        }
    }

    #[must_use]
    pub fn centered(mut self) -> Self {
        self.left = Some("center".to_owned());
        self
    }
}

/// Tooltip section; an empty value enables the engine's default tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TooltipTrigger>,
}

impl TooltipOption {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn triggered_by(trigger: TooltipTrigger) -> Self {
        Self {
            trigger: Some(trigger),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipTrigger {
    Item,
    Axis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOption {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

impl AxisOption {
    /// Category axis carrying explicit entry labels.
    #[must_use]
    pub fn category<I, S>(data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: AxisKind::Category,
            data: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Continuous value axis; the engine derives the range from the data.
    #[must_use]
    pub fn value() -> Self {
        Self {
            kind: AxisKind::Value,
            data: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<SeriesEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
}

impl SeriesOption {
    #[must_use]
    pub fn bar(name: impl Into<String>) -> Self {
        Self::with_kind(name, SeriesKind::Bar)
    }

    #[must_use]
    pub fn line(name: impl Into<String>) -> Self {
        Self::with_kind(name, SeriesKind::Line)
    }

    fn with_kind(name: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            name: name.into(),
            kind,
            data: Vec::new(),
            item_style: None,
        }
    }

    /// Replaces the series data with plain numeric entries.
    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.data = values.into_iter().map(SeriesEntry::from).collect();
        self
    }

    #[must_use]
    pub fn with_entry(mut self, entry: SeriesEntry) -> Self {
        self.data.push(entry);
        self
    }

    #[must_use]
    pub fn with_item_style(mut self, style: ItemStyle) -> Self {
        self.item_style = Some(style);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Bar,
    Line,
}

/// One series sample: either a bare value or a value with entry-level style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesEntry {
    Value(f64),
    #[serde(rename_all = "camelCase")]
    Styled {
        value: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        item_style: Option<ItemStyle>,
    },
}

impl SeriesEntry {
    #[must_use]
    pub fn styled(value: f64, color: impl Into<String>) -> Self {
        Self::Styled {
            value,
            item_style: Some(ItemStyle::colored(color)),
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Value(value) | Self::Styled { value, .. } => *value,
        }
    }
}

impl From<f64> for SeriesEntry {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    pub color: String,
}

impl ItemStyle {
    #[must_use]
    pub fn colored(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}
