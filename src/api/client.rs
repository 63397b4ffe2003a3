//! Sales API Client
//!
//! A JSON-over-HTTP client for the retail sales backend.

use crate::api::SalesApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::events::Flow;
use crate::models::{CategorySales, InsightsSummary, MonthlySales, TransactionList, TransactionRecord};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("sales-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SalesApiClient {
    client: Client,
    environment: Environment,
}

impl SalesApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(cli_consts::connect_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// Fetches `endpoint` and deserializes its JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl SalesApi for SalesApiClient {
    async fn get_insights(&self) -> Result<InsightsSummary, ApiError> {
        self.get_json(Flow::Insights.endpoint()).await
    }

    async fn get_sales_by_category(&self) -> Result<CategorySales, ApiError> {
        self.get_json(Flow::CategoryChart.endpoint()).await
    }

    async fn get_sales_by_month(&self) -> Result<MonthlySales, ApiError> {
        self.get_json(Flow::MonthlyChart.endpoint()).await
    }

    async fn get_transactions(&self) -> Result<TransactionList, ApiError> {
        self.get_json(Flow::Transactions.endpoint()).await
    }

    async fn get_transaction(&self, transaction_id: u64) -> Result<TransactionRecord, ApiError> {
        let endpoint = format!("{}/{}", Flow::Transactions.endpoint(), transaction_id);
        self.get_json(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SalesApiClient {
        SalesApiClient::new(Environment::Custom {
            api_url: server.uri(),
        })
    }

    #[tokio::test]
    /// Should deserialize the insights summary.
    async fn test_get_insights() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/insights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_sales": 1000.5,
                "average_age": 42,
                "male_count": 7,
                "female_count": 3
            })))
            .mount(&server)
            .await;

        let insights = client_for(&server).get_insights().await.unwrap();
        assert_eq!(insights.total_sales, 1000.5);
        assert_eq!(insights.male_count, 7);
    }

    #[tokio::test]
    /// Should fetch both sales series from their own endpoints.
    async fn test_get_sales_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sales/category"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "labels": ["A", "B"],
                "data": [10, 20]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sales/month"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "labels": ["January"],
                "data": [36980.0]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let category = client.get_sales_by_category().await.unwrap();
        let month = client.get_sales_by_month().await.unwrap();
        assert_eq!(category.into_parts().1, vec![10.0, 20.0]);
        assert_eq!(month.into_parts().0, vec!["January".to_string()]);
    }

    #[tokio::test]
    /// Should keep transaction fields in response order.
    async fn test_get_transactions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"[{"id":1,"amount":50}]"#, "application/json"),
            )
            .mount(&server)
            .await;

        let transactions = client_for(&server).get_transactions().await.unwrap();
        assert_eq!(transactions.len(), 1);
        let values: Vec<&str> = transactions[0].values().collect();
        assert_eq!(values, vec!["1", "50"]);
    }

    #[tokio::test]
    /// Should request a single transaction by ID and surface 404 as an HTTP error.
    async fn test_get_transaction_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transaction_id": 5,
                "gender": "Male"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/transactions/6"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = client.get_transaction(5).await.unwrap();
        assert_eq!(record.to_string(), "transaction_id: 5\ngender: Male");

        let err = client.get_transaction(6).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    /// A body that is not JSON is a format error.
    async fn test_invalid_body_is_format_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/insights"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_insights().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[tokio::test]
    /// Category labels and data of different lengths are a format error.
    async fn test_unequal_category_series_is_format_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sales/category"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "labels": ["Beauty", "Clothing", "Electronics"],
                "data": [143515, 155580]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_sales_by_category()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("differ in length"));
    }

    #[tokio::test]
    /// Fields of the wrong JSON type are format errors, not partial data.
    async fn test_mistyped_fields_are_format_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/insights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_sales": 1000.5,
                "average_age": 42,
                "male_count": "7",
                "female_count": 3
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sales/category"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "labels": ["Beauty"],
                "data": ["x"]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let insights_err = client.get_insights().await.unwrap_err();
        let category_err = client.get_sales_by_category().await.unwrap_err();
        assert_eq!(insights_err.kind(), ErrorKind::Format);
        assert_eq!(category_err.kind(), ErrorKind::Format);
    }

    #[tokio::test]
    /// A server error is a network error carrying the status.
    async fn test_server_error_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sales/month"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Error fetching sales by month"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_sales_by_month()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_build_url_joins_without_double_slash() {
        let client = SalesApiClient::new(Environment::Custom {
            api_url: "http://example.test/".to_string(),
        });
        assert_eq!(client.build_url("/insights"), "http://example.test/insights");
    }
}
