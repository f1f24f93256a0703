use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::api::{
    BabyCostRequest, BabyCostResult, ConceptionRequest, ConceptionResult, DueDateRequest,
    DueDateResult, HealthResponse, OvulationRequest, OvulationResult, PregnancyCheckRequest,
    PregnancyCheckResult, PregnancyWeekData, PregnancyWeekRequest, PregnancyWeekResult,
    VaccinationRequest, VaccinationStage,
};
use crate::routes::{
    baby_cost::BABY_COST_PATH, conception::CONCEPTION_PATH, due_date::DUE_DATE_PATH,
    health::HEALTH_PATH, ovulation::OVULATION_PATH, pregnancy_check::PREGNANCY_CHECK_PATH,
    pregnancy_week::{PREGNANCY_WEEKS_PATH, PREGNANCY_WEEK_DETAIL_PATH, PREGNANCY_WEEK_PATH},
    vaccination::VACCINATION_SCHEDULE_PATH, TOOLS_PREFIX,
};

const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(200);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// The `code` field of an API error body (`BAD_REQUEST`, `NOT_FOUND`, ...).
    pub fn api_code(&self) -> Option<String> {
        match self {
            ClientError::Status { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()?
                .get("code")?
                .as_str()
                .map(str::to_string),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolsClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
    max_retries: u32,
    retry_backoff: Duration,
}

impl ToolsClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                message: "expected an http(s) url".to_string(),
            });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
            max_retries: 0,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        })
    }

    /// Per-request timeout. A timed out request is a transport error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry transport failures up to `retries` times with linear backoff.
    /// Error responses from the server are never retried.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tools_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, TOOLS_PREFIX, path)
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        self.execute(|| self.http.get(&url)).await
    }

    pub async fn due_date(&self, request: &DueDateRequest) -> Result<DueDateResult, ClientError> {
        self.post(DUE_DATE_PATH, request).await
    }

    pub async fn ovulation(
        &self,
        request: &OvulationRequest,
    ) -> Result<OvulationResult, ClientError> {
        self.post(OVULATION_PATH, request).await
    }

    pub async fn conception(
        &self,
        request: &ConceptionRequest,
    ) -> Result<ConceptionResult, ClientError> {
        self.post(CONCEPTION_PATH, request).await
    }

    pub async fn pregnancy_week(
        &self,
        request: &PregnancyWeekRequest,
    ) -> Result<PregnancyWeekResult, ClientError> {
        self.post(PREGNANCY_WEEK_PATH, request).await
    }

    pub async fn pregnancy_week_detail(&self, week: u32) -> Result<PregnancyWeekData, ClientError> {
        let path = PREGNANCY_WEEK_DETAIL_PATH.replace("{week}", &week.to_string());
        self.get(&path).await
    }

    pub async fn pregnancy_weeks(&self) -> Result<Vec<PregnancyWeekData>, ClientError> {
        self.get(PREGNANCY_WEEKS_PATH).await
    }

    pub async fn pregnancy_check(
        &self,
        request: &PregnancyCheckRequest,
    ) -> Result<PregnancyCheckResult, ClientError> {
        self.post(PREGNANCY_CHECK_PATH, request).await
    }

    pub async fn vaccination_schedule(
        &self,
        request: &VaccinationRequest,
    ) -> Result<Vec<VaccinationStage>, ClientError> {
        self.post(VACCINATION_SCHEDULE_PATH, request).await
    }

    pub async fn baby_cost(
        &self,
        request: &BabyCostRequest,
    ) -> Result<BabyCostResult, ClientError> {
        self.post(BABY_COST_PATH, request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.tools_url(path);
        self.execute(|| self.http.get(&url)).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.tools_url(path);
        self.execute(|| self.http.post(&url).json(body)).await
    }

    async fn execute<T, F>(&self, build: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt: u32 = 0;
        let response = loop {
            attempt += 1;
            let mut request = build();
            if let Some(timeout) = self.timeout {
                request = request.timeout(timeout);
            }
            match request.send().await {
                Ok(response) => break response,
                Err(e) if attempt <= self.max_retries => {
                    log::warn!("tools request failed (attempt {}): {}", attempt, e);
                    tokio::time::sleep(self.retry_backoff.saturating_mul(attempt)).await;
                }
                Err(e) => return Err(ClientError::Transport(e)),
            }
        };

        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::Transport)?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(ClientError::Decode)
    }
}
