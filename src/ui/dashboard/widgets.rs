//! Widget model
//!
//! Renderer-independent description of what each dashboard widget shows.
//! The flows mutate these values; the components draw them.

use crate::api::error::ErrorKind;
use crate::models::{InsightsSummary, SalesSeries, TransactionList, format_number};
use std::fmt::{self, Display, Formatter};

/// Placeholder shown in a widget whose flow failed.
pub const UNAVAILABLE: &str = "unavailable";

/// Static header of the transaction table.
///
/// Mirrors the backend's transaction model and is never synchronized with
/// the fields actually returned.
pub const TRANSACTION_HEADER: [&str; 9] = [
    "Transaction ID",
    "Date",
    "Customer ID",
    "Gender",
    "Age",
    "Product Category",
    "Quantity",
    "Price per Unit",
    "Total Amount",
];

/// Lifecycle of a widget's content.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetStatus<T> {
    /// Flow still in flight.
    Loading,
    Ready(T),
    /// Flow failed; the widget shows [`UNAVAILABLE`].
    Unavailable(ErrorKind),
}

#[cfg(test)]
impl<T> WidgetStatus<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            WidgetStatus::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetStatus::Loading)
    }
}

/// Fixed-format text block for the insights widget.
pub fn insights_lines(summary: &InsightsSummary) -> Vec<String> {
    vec![
        format!("Total Sales: ${}", format_number(summary.total_sales)),
        format!("Average Age: {}", format_number(summary.average_age)),
        format!("Male Customers: {}", summary.male_count),
        format!("Female Customers: {}", summary.female_count),
    ]
}

/// An RGBA color in CSS notation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Colors and stroke of one dataset.
///
/// The terminal dashboard can only paint opaque cells, so it draws every
/// dataset in `border_color`. Headless output lists the whole style.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStyle {
    pub background_color: Option<Rgba>,
    pub border_color: Rgba,
    pub border_width: Option<u16>,
    pub fill: bool,
}

impl Display for DatasetStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "border {}", self.border_color)?;
        if let Some(width) = self.border_width {
            write!(f, " width {}", width)?;
        }
        match (self.fill, self.background_color) {
            (true, Some(background)) => write!(f, ", fill {}", background),
            (true, None) => write!(f, ", filled"),
            (false, _) => write!(f, ", no fill"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub style: DatasetStyle,
}

/// Chart definition: kind, X categories, series and Y-axis options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_begin_at_zero: bool,
}

pub const CATEGORY_DATASET_LABEL: &str = "Sales by Product Category";
pub const MONTHLY_DATASET_LABEL: &str = "Sales by Month";

impl ChartConfig {
    /// Bar chart of sales per product category.
    pub fn category_bar(series: SalesSeries) -> Self {
        let (labels, data) = series.into_parts();
        Self {
            kind: ChartKind::Bar,
            labels,
            datasets: vec![Dataset {
                label: CATEGORY_DATASET_LABEL.to_string(),
                data,
                style: DatasetStyle {
                    background_color: Some(Rgba::new(54, 162, 235, 0.2)),
                    border_color: Rgba::new(54, 162, 235, 1.0),
                    border_width: Some(1),
                    fill: true,
                },
            }],
            y_begin_at_zero: true,
        }
    }

    /// Line chart of sales per month, without area fill.
    pub fn monthly_line(series: SalesSeries) -> Self {
        let (labels, data) = series.into_parts();
        Self {
            kind: ChartKind::Line,
            labels,
            datasets: vec![Dataset {
                label: MONTHLY_DATASET_LABEL.to_string(),
                data,
                style: DatasetStyle {
                    background_color: None,
                    border_color: Rgba::new(255, 99, 132, 1.0),
                    border_width: None,
                    fill: false,
                },
            }],
            y_begin_at_zero: true,
        }
    }

    /// Title of the chart's single dataset.
    pub fn title(&self) -> &str {
        self.datasets
            .first()
            .map(|dataset| dataset.label.as_str())
            .unwrap_or_default()
    }

    /// `(label, value)` pairs of the first dataset, in order.
    pub fn points(&self) -> Vec<(&str, f64)> {
        let data = self
            .datasets
            .first()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default();
        self.labels
            .iter()
            .map(String::as_str)
            .zip(data.iter().copied())
            .collect()
    }

    /// Lower and upper Y-axis bounds covering every data point.
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self.datasets.iter().flat_map(|dataset| dataset.data.iter().copied());
        let (mut min, mut max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !min.is_finite() || !max.is_finite() {
            min = 0.0;
            max = 0.0;
        }
        if self.y_begin_at_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        if max <= min {
            max = min + 1.0;
        }
        [min, max]
    }
}

/// Transaction table body; rows only ever get appended.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTable {
    rows: Vec<Vec<String>>,
    status: WidgetStatus<()>,
}

impl Default for TransactionTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            status: WidgetStatus::Loading,
        }
    }
}

impl TransactionTable {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn status(&self) -> &WidgetStatus<()> {
        &self.status
    }

    /// Appends one row per record, one cell per field in record order.
    pub fn append(&mut self, transactions: TransactionList) {
        self.rows.extend(
            transactions
                .iter()
                .map(|record| record.values().map(str::to_string).collect()),
        );
        self.status = WidgetStatus::Ready(());
    }

    pub fn mark_unavailable(&mut self, kind: ErrorKind) {
        self.status = WidgetStatus::Unavailable(kind);
    }

    /// Widest row, never narrower than the static header.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(TRANSACTION_HEADER.len())
    }
}
