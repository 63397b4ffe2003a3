//! Response shapes served by the sales backend.
//!
//! Every entity here is deserialized from exactly one response body and moved
//! into the widget that renders it.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt::{self, Display, Formatter};

/// Headline figures served by `GET /insights`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsightsSummary {
    pub total_sales: f64,
    pub average_age: f64,
    pub male_count: u64,
    pub female_count: u64,
}

/// Parallel label/value arrays served by the `/sales/*` endpoints.
///
/// Both arrays always have the same length; a body where they differ is
/// rejected during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSalesSeries")]
pub struct SalesSeries {
    labels: Vec<String>,
    data: Vec<f64>,
}

/// Sales grouped by product category (`GET /sales/category`).
pub type CategorySales = SalesSeries;

/// Sales grouped by month (`GET /sales/month`).
pub type MonthlySales = SalesSeries;

#[derive(Deserialize)]
struct RawSalesSeries {
    labels: Vec<String>,
    data: Vec<f64>,
}

impl TryFrom<RawSalesSeries> for SalesSeries {
    type Error = String;

    fn try_from(raw: RawSalesSeries) -> Result<Self, Self::Error> {
        SalesSeries::new(raw.labels, raw.data)
    }
}

impl SalesSeries {
    /// Pairs labels with values, rejecting arrays of different length.
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Result<Self, String> {
        if labels.len() != data.len() {
            return Err(format!(
                "labels and data differ in length ({} labels, {} values)",
                labels.len(),
                data.len()
            ));
        }
        Ok(Self { labels, data })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.labels, self.data)
    }
}

/// One transaction as an ordered list of `(field, text)` pairs.
///
/// The field set is decided by the backend, so records are kept dynamic.
/// Field order is the order in which fields appear in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionRecord {
    fields: Vec<(String, String)>,
}

/// All transactions served by `GET /transactions`, in response order.
pub type TransactionList = Vec<TransactionRecord>;

impl TransactionRecord {
    /// Cell texts in field order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }
}

impl From<Map<String, Value>> for TransactionRecord {
    fn from(object: Map<String, Value>) -> Self {
        let fields = object
            .into_iter()
            .map(|(name, value)| (name, plain_text(&value)))
            .collect();
        Self { fields }
    }
}

impl<'de> Deserialize<'de> for TransactionRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Map::<String, Value>::deserialize(deserializer).map(TransactionRecord::from)
    }
}

impl Display for TransactionRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

/// Plain text form of a JSON value as it appears in a table cell.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_f64() {
                n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Number text in the form a browser prints it: no trailing `.0`, negative
/// zero as `0`, and exponent notation with a signed exponent below `1e-6`
/// and from `1e21` up.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude.is_finite() && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_deserializes_integral_average_age() {
        let body = r#"{"total_sales": 1000.5, "average_age": 42, "male_count": 7, "female_count": 3}"#;
        let insights: InsightsSummary = serde_json::from_str(body).unwrap();
        assert_eq!(insights.total_sales, 1000.5);
        assert_eq!(insights.average_age, 42.0);
        assert_eq!(insights.male_count, 7);
        assert_eq!(insights.female_count, 3);
    }

    #[test]
    fn test_insights_rejects_missing_field() {
        let body = r#"{"total_sales": 1.0, "average_age": 42, "male_count": 7}"#;
        assert!(serde_json::from_str::<InsightsSummary>(body).is_err());
    }

    #[test]
    fn test_sales_series_rejects_unequal_lengths() {
        let body = r#"{"labels": ["A", "B"], "data": [10]}"#;
        let err = serde_json::from_str::<SalesSeries>(body).unwrap_err();
        assert!(err.to_string().contains("differ in length"));
    }

    #[test]
    fn test_sales_series_keeps_positional_pairs() {
        let body = r#"{"labels": ["A", "B"], "data": [10, 20]}"#;
        let series: CategorySales = serde_json::from_str(body).unwrap();
        assert_eq!(series.len(), 2);
        let (labels, data) = series.into_parts();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(data, vec![10.0, 20.0]);
    }

    #[test]
    fn test_transaction_keeps_document_field_order() {
        let body = r#"[{"zeta": "z", "id": 1, "amount": 50}]"#;
        let list: TransactionList = serde_json::from_str(body).unwrap();
        assert_eq!(list.len(), 1);
        let values: Vec<&str> = list[0].values().collect();
        assert_eq!(values, vec!["z", "1", "50"]);
        assert!(list[0].to_string().starts_with("zeta: z\n"));
    }

    #[test]
    fn test_transaction_list_rejects_non_array() {
        assert!(serde_json::from_str::<TransactionList>(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_plain_text_of_scalars() {
        assert_eq!(plain_text(&serde_json::json!(null)), "");
        assert_eq!(plain_text(&serde_json::json!(true)), "true");
        assert_eq!(plain_text(&serde_json::json!(42.0)), "42");
        assert_eq!(plain_text(&serde_json::json!(1000.5)), "1000.5");
        assert_eq!(plain_text(&serde_json::json!(-3)), "-3");
        assert_eq!(plain_text(&serde_json::json!("Beauty")), "Beauty");
        assert_eq!(plain_text(&serde_json::json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_format_number_edges() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(36980.0), "36980");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn test_record_display_lists_fields() {
        let body = r#"{"transaction_id": 7, "gender": "Female"}"#;
        let record: TransactionRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.to_string(), "transaction_id: 7\ngender: Female");
    }
}
