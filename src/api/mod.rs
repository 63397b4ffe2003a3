use crate::api::error::ApiError;
use crate::models::{CategorySales, InsightsSummary, MonthlySales, TransactionList, TransactionRecord};

pub(crate) mod client;
pub use client::SalesApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SalesApi: Send + Sync {
    /// Headline figures: total sales, average age, gender counts.
    async fn get_insights(&self) -> Result<InsightsSummary, ApiError>;

    /// Total sales per product category.
    async fn get_sales_by_category(&self) -> Result<CategorySales, ApiError>;

    /// Total sales per month.
    async fn get_sales_by_month(&self) -> Result<MonthlySales, ApiError>;

    /// Every transaction, in backend order.
    async fn get_transactions(&self) -> Result<TransactionList, ApiError>;

    /// A single transaction by its ID.
    async fn get_transaction(&self, transaction_id: u64) -> Result<TransactionRecord, ApiError>;
}
