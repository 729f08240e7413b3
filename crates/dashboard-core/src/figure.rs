//! Chart figures built from datasets.
//!
//! Figures follow the plotly JSON schema (`{ "data": [...], "layout": {...} }`)
//! so the page shell can hand them straight to plotly.js. Columns are picked
//! by name; an optional colour column splits the rows into one trace per
//! distinct value, in order of first appearance.

use crate::dataset::{Column, Dataset};
use crate::error::FigureError;
use crate::theme::Theme;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// How bars of different traces share an x position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    #[default]
    Group,
    Stack,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub sizemode: String,
    pub sizeref: f64,
}

/// One series of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FigureLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

/// Bar chart specification.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub x: String,
    pub y: String,
    pub color: Option<String>,
    pub barmode: BarMode,
}

impl BarSpec {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            color: None,
            barmode: BarMode::default(),
        }
    }

    #[must_use]
    pub fn color(mut self, column: impl Into<String>) -> Self {
        self.color = Some(column.into());
        self
    }

    #[must_use]
    pub fn barmode(mut self, barmode: BarMode) -> Self {
        self.barmode = barmode;
        self
    }
}

/// Scatter (bubble) chart specification.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub x: String,
    pub y: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub hover_name: Option<String>,
    pub log_x: bool,
    /// Maximum marker diameter in pixels
    pub size_max: f64,
}

impl ScatterSpec {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            size: None,
            color: None,
            hover_name: None,
            log_x: false,
            size_max: 20.0,
        }
    }

    #[must_use]
    pub fn size(mut self, column: impl Into<String>) -> Self {
        self.size = Some(column.into());
        self
    }

    #[must_use]
    pub fn color(mut self, column: impl Into<String>) -> Self {
        self.color = Some(column.into());
        self
    }

    #[must_use]
    pub fn hover_name(mut self, column: impl Into<String>) -> Self {
        self.hover_name = Some(column.into());
        self
    }

    #[must_use]
    pub fn log_x(mut self, log_x: bool) -> Self {
        self.log_x = log_x;
        self
    }

    #[must_use]
    pub fn size_max(mut self, size_max: f64) -> Self {
        self.size_max = size_max;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn bar(dataset: &Dataset, spec: &BarSpec) -> Result<Self, FigureError> {
        let x = column(dataset, &spec.x)?;
        let y = column(dataset, &spec.y)?;
        let color = spec.color.as_deref().map(|c| column(dataset, c)).transpose()?;

        let data = group_rows(dataset.num_rows(), color)
            .into_iter()
            .map(|(name, rows)| Trace {
                kind: TraceKind::Bar,
                name,
                x: pick(x, &rows),
                y: pick(y, &rows),
                mode: None,
                marker: None,
                hovertext: None,
            })
            .collect();

        Ok(Self {
            data,
            layout: FigureLayout {
                barmode: Some(spec.barmode),
                xaxis: Some(axis(&spec.x, false)),
                yaxis: Some(axis(&spec.y, false)),
                legend_title: spec.color.clone(),
                ..FigureLayout::default()
            },
        })
    }

    pub fn scatter(dataset: &Dataset, spec: &ScatterSpec) -> Result<Self, FigureError> {
        let x = column(dataset, &spec.x)?;
        let y = column(dataset, &spec.y)?;
        let color = spec.color.as_deref().map(|c| column(dataset, c)).transpose()?;
        let hover = spec
            .hover_name
            .as_deref()
            .map(|c| column(dataset, c))
            .transpose()?;
        let sizes = spec
            .size
            .as_deref()
            .map(|c| numeric_column(dataset, c))
            .transpose()?;
        let sizeref = sizes
            .as_ref()
            .map(|s| size_reference(s, spec.size_max))
            .unwrap_or(1.0);

        let data = group_rows(dataset.num_rows(), color)
            .into_iter()
            .map(|(name, rows)| Trace {
                kind: TraceKind::Scatter,
                name,
                x: pick(x, &rows),
                y: pick(y, &rows),
                mode: Some("markers".to_string()),
                marker: sizes.as_ref().map(|s| Marker {
                    size: rows.iter().map(|&r| s[r]).collect(),
                    sizemode: "area".to_string(),
                    sizeref,
                }),
                hovertext: hover.map(|h| rows.iter().map(|&r| h.values[r].display_text()).collect()),
            })
            .collect();

        Ok(Self {
            data,
            layout: FigureLayout {
                xaxis: Some(axis(&spec.x, spec.log_x)),
                yaxis: Some(axis(&spec.y, false)),
                legend_title: spec.color.clone(),
                ..FigureLayout::default()
            },
        })
    }

    /// Apply theme colours to the plot area, paper and font.
    #[must_use]
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.layout.plot_bgcolor = Some(theme.background.clone());
        self.layout.paper_bgcolor = Some(theme.background.clone());
        self.layout.font = Some(Font {
            color: theme.text.clone(),
        });
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn column<'a>(dataset: &'a Dataset, name: &str) -> Result<&'a Column, FigureError> {
    dataset
        .column(name)
        .ok_or_else(|| FigureError::UnknownColumn(name.to_string()))
}

fn numeric_column(dataset: &Dataset, name: &str) -> Result<Vec<f64>, FigureError> {
    column(dataset, name)?
        .values
        .iter()
        .map(|v| match v {
            Value::Null => Ok(0.0),
            other => other
                .as_f64()
                .ok_or_else(|| FigureError::NonNumericColumn(name.to_string())),
        })
        .collect()
}

/// Area-mode size reference so the largest marker is `size_max` pixels wide.
fn size_reference(sizes: &[f64], size_max: f64) -> f64 {
    let max = sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 && size_max > 0.0 {
        2.0 * max / (size_max * size_max)
    } else {
        1.0
    }
}

/// Split row indices by the display text of the colour column, keeping
/// first-appearance order of groups and dataset order within a group.
fn group_rows(num_rows: usize, color: Option<&Column>) -> Vec<(Option<String>, Vec<usize>)> {
    let Some(color) = color else {
        return vec![(None, (0..num_rows).collect())];
    };

    let mut groups: Vec<(Option<String>, Vec<usize>)> = Vec::new();
    for (row, value) in color.values.iter().enumerate() {
        let key = value.display_text();
        match groups.iter_mut().find(|(name, _)| name.as_deref() == Some(key.as_str())) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((Some(key), vec![row])),
        }
    }
    groups
}

fn pick(column: &Column, rows: &[usize]) -> Vec<Value> {
    rows.iter().map(|&r| column.values[r].clone()).collect()
}

fn axis(title: &str, log: bool) -> Axis {
    Axis {
        title: title.to_string(),
        axis_type: log.then(|| "log".to_string()),
    }
}
