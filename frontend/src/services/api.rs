use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{items_endpoint, Expense, ExpenseApi, FetchError, NewExpense};

/// API client for the expenses backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn items_url(&self) -> String {
        items_endpoint(&self.base_url)
    }
}

#[async_trait(?Send)]
impl ExpenseApi for ApiClient {
    /// Get every expense from the backend
    async fn list(&self) -> Result<Vec<Expense>, FetchError> {
        let response = Request::get(&self.items_url())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = expect_status(response, &[200]).await?;
        response
            .json::<Vec<Expense>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Create an expense; the backend replies with the stored record
    async fn create(&self, expense: &NewExpense) -> Result<Expense, FetchError> {
        let request = Request::post(&self.items_url())
            .header("Content-Type", "application/json")
            .json(expense)
            .map_err(|e| FetchError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = expect_status(response, &[200, 201]).await?;
        response
            .json::<Expense>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

async fn expect_status(response: Response, accepted: &[u16]) -> Result<Response, FetchError> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(FetchError::Status { status, body })
}
