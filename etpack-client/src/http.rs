//! HTTP client for the form-list server

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::request::{FORMS_PATH, FormList, FormListQuery, FormListUpdate};
use shared::{ApiResponse, Department, FormDescriptor};

use crate::forms::RemoteFormStore;
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the form-list server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned, Q: serde::Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the envelope message when the server sent one
            let message = serde_json::from_str::<ApiResponse<()>>(&text)
                .map(|envelope| envelope.message)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap `data` from a success envelope
    fn into_data<T>(envelope: ApiResponse<T>, what: &str) -> ClientResult<T> {
        if !envelope.is_success() {
            return Err(ClientError::InvalidResponse(envelope.message));
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }

    // ========== Forms API ==========

    /// Read the stored list of a department (empty if never written)
    pub async fn fetch_form_list(&self, department: &str) -> ClientResult<FormList> {
        let query = FormListQuery {
            department: Some(department.to_string()),
        };
        let envelope = self
            .get::<ApiResponse<FormList>, _>(FORMS_PATH, &query)
            .await?;
        Self::into_data(envelope, "form list")
    }

    /// Replace the stored list of a department; returns the stored list
    pub async fn store_form_list(
        &self,
        department: &str,
        forms: Vec<FormDescriptor>,
    ) -> ClientResult<FormList> {
        let body = FormListUpdate::new(department, forms);
        let envelope = self
            .post::<ApiResponse<FormList>, _>(FORMS_PATH, &body)
            .await?;
        Self::into_data(envelope, "form list")
    }
}

#[async_trait]
impl RemoteFormStore for HttpClient {
    async fn fetch_forms(&self, department: Department) -> ClientResult<Vec<FormDescriptor>> {
        Ok(self.fetch_form_list(department.id()).await?.forms)
    }

    async fn store_forms(
        &self,
        department: Department,
        forms: Vec<FormDescriptor>,
    ) -> ClientResult<Vec<FormDescriptor>> {
        Ok(self.store_form_list(department.id(), forms).await?.forms)
    }
}
