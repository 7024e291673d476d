//! HTTP calls to the finance mentor backend.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Budget, ChatReply, ChatRequest, DashboardSummary, Expense, NewBudget, NewExpense};

/// Operations the dashboard needs from the backend. Each one is a single
/// request/response exchange with no retry, timeout or caching.
pub trait FinanceApi {
    async fn fetch_dashboard_summary(&self) -> Result<DashboardSummary, ApiError>;

    async fn fetch_expenses(&self) -> Result<Vec<Expense>, ApiError>;

    async fn fetch_budgets(&self) -> Result<Vec<Budget>, ApiError>;

    /// Without a category the server picks one itself.
    async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError>;

    async fn create_budget(&self, budget: &NewBudget) -> Result<(), ApiError>;

    async fn send_chat_message(&self, message: &str) -> Result<ChatReply, ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.config.url(path);
        log::debug!("POST {}", url);
        let resp = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_ok(resp)
    }
}

impl FinanceApi for HttpClient {
    async fn fetch_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json("/dashboard").await
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get_json("/expenses").await
    }

    async fn fetch_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        self.get_json("/budgets").await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        self.post_json("/expenses", expense).await.map(|_| ())
    }

    async fn create_budget(&self, budget: &NewBudget) -> Result<(), ApiError> {
        self.post_json("/budgets", budget).await.map(|_| ())
    }

    async fn send_chat_message(&self, message: &str) -> Result<ChatReply, ApiError> {
        let resp = self.post_json("/chat", &ChatRequest { message }).await?;
        read_json(resp).await
    }
}

fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    check_status(resp.ok(), resp.status())?;
    Ok(resp)
}

/// Anything outside 2xx is a failure, whatever the body says.
fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = ensure_ok(resp)?;
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(&body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass_through() {
        assert_eq!(check_status(true, 200), Ok(()));
        assert_eq!(check_status(true, 201), Ok(()));
    }

    #[test]
    fn failing_statuses_become_status_errors() {
        assert_eq!(check_status(false, 404), Err(ApiError::Status(404)));
        assert_eq!(check_status(false, 500), Err(ApiError::Status(500)));
        assert_eq!(
            check_status(false, 503).unwrap_err().to_string(),
            "server responded with status 503"
        );
    }

    #[test]
    fn decode_reports_malformed_json() {
        let err = decode::<Vec<Budget>>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn decode_reads_budget_list() {
        let budgets: Vec<Budget> =
            decode(r#"[{"id": 7, "category": "Food", "amount": 300, "month": "2024-08"}]"#).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, 300.0);
    }

    #[test]
    fn chat_request_body_shape() {
        let body = serde_json::to_value(ChatRequest { message: "How am I doing?" }).unwrap();
        assert_eq!(body, serde_json::json!({"message": "How am I doing?"}));
    }
}
