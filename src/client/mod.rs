use std::time::Duration;
use anyhow::{anyhow, Context};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use crate::models::citizen::CitizenPayload;
use crate::models::feedback::FeedbackCode;
use crate::models::reservation::ReservationPayload;

pub const DEFAULT_BASE_URL: &str = "https://wcg-apis.herokuapp.com";

pub const RESERVATION_DATABASE_PATH: &str = "/reservation_database";
pub const REGISTRATION_PATH: &str = "/registration";
pub const RESERVATION_PATH: &str = "/reservation";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub feedback: String,
}

impl ApiResponse {
    pub fn feedback_code(&self) -> Option<FeedbackCode> {
        FeedbackCode::from_message(&self.feedback)
    }
}

/// Blocking client for the WCG registration and reservation endpoints.
#[derive(Clone, Debug)]
pub struct ReservationClient {
    client: Client,
    base_url: String,
}

impl ReservationClient {
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("Error building the HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn delete_reservation(
        &self,
        payload: &ReservationPayload,
    ) -> anyhow::Result<ApiResponse> {
        let url = self.url(RESERVATION_DATABASE_PATH);
        self.send(self.client.delete(&url), &url, payload)
    }

    pub fn register_citizen(
        &self,
        payload: &CitizenPayload,
    ) -> anyhow::Result<ApiResponse> {
        let url = self.url(REGISTRATION_PATH);
        self.send(self.client.post(&url), &url, payload)
    }

    pub fn make_reservation(
        &self,
        payload: &ReservationPayload,
    ) -> anyhow::Result<ApiResponse> {
        let url = self.url(RESERVATION_PATH);
        self.send(self.client.post(&url), &url, payload)
    }

    /// Like `delete_reservation`, but only the status is read, whatever the body.
    pub fn delete_reservation_status(
        &self,
        payload: &ReservationPayload,
    ) -> anyhow::Result<u16> {
        let url = self.url(RESERVATION_DATABASE_PATH);
        self.send_for_status(self.client.delete(&url), &url, payload)
    }

    /// Like `register_citizen`, but only the status is read, whatever the body.
    pub fn register_citizen_status(
        &self,
        payload: &CitizenPayload,
    ) -> anyhow::Result<u16> {
        let url = self.url(REGISTRATION_PATH);
        self.send_for_status(self.client.post(&url), &url, payload)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn dispatch<T: Serialize + std::fmt::Debug>(
        &self,
        request: RequestBuilder,
        url: &str,
        payload: &T,
    ) -> anyhow::Result<Response> {
        debug!("Sending {:?} to {}", payload, url);
        request
            .form(payload)
            .send()
            .with_context(|| format!("Error sending request to {}", url))
    }

    fn send_for_status<T: Serialize + std::fmt::Debug>(
        &self,
        request: RequestBuilder,
        url: &str,
        payload: &T,
    ) -> anyhow::Result<u16> {
        let response = self.dispatch(request, url, payload)?;
        let status = response.status().as_u16();
        match response.text() {
            Ok(body) => debug!("{} answered {} with body: {}", url, status, body),
            Err(e) => debug!("{} answered {} with an unreadable body: {}", url, status, e),
        }
        Ok(status)
    }

    fn send<T: Serialize + std::fmt::Debug>(
        &self,
        request: RequestBuilder,
        url: &str,
        payload: &T,
    ) -> anyhow::Result<ApiResponse> {
        let response = self.dispatch(request, url, payload)?;

        let status = response.status().as_u16();
        let body: Value = response
            .json()
            .with_context(|| format!("Response from {} is not JSON", url))?;
        let feedback = feedback_from_body(&body)
            .with_context(|| format!("Unexpected response shape from {}", url))?;

        debug!("{} answered {} with feedback: {}", url, status, feedback);
        Ok(ApiResponse { status, feedback })
    }
}

fn feedback_from_body(body: &Value) -> anyhow::Result<String> {
    body.get("feedback")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("missing string field `feedback` in {}", body))
}
