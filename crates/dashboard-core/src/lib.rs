//! Dashboard Core Library
//!
//! Tabular datasets, a generic markup tree, and the renderers and
//! components that turn one into the other.

pub mod components;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod markup;
pub mod table;
pub mod theme;
pub mod value;

pub use components::Layout;
pub use dataset::{Column, CsvOptions, Dataset};
pub use error::{DashboardError, DatasetError, FigureError, Result};
pub use figure::{BarMode, BarSpec, Figure, ScatterSpec};
pub use markup::{Element, MarkupNode, Style, Tag};
pub use table::{render_table, render_table_default, DEFAULT_MAX_ROWS};
pub use theme::Theme;
pub use value::Value;
