use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{Config, WeatherError, WeatherResult};

use super::WeatherFetcher;

/// Fetcher backed by the WeatherAPI.com `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiFetcher {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    /// Construct a fetcher from the resolved key and endpoint in `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::with_base_url(config.api_key()?, config.base_url().to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: Option<WaLocation>,
    current: Option<WaCurrent>,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: Option<WaErrorDetail>,
}

#[async_trait]
impl WeatherFetcher for WeatherApiFetcher {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        debug!("requesting current conditions");

        let result = self.round_trip(city).await;
        match &result {
            Ok(weather) => debug!(location = %weather.city_name, "weather received"),
            Err(err) => warn!(error = %err, "weather request failed"),
        }
        result
    }
}

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

impl WeatherApiFetcher {
    async fn round_trip(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        let res = self.http.get(self.request_url(city)?).send().await?;

        let status = res.status();
        if !status.is_success() {
            // a body cut short still leaves the status to classify the failure
            let body = res.text().await.unwrap_or_default();
            debug!(%status, body = %truncate_body(&body), "non-success response");
            return Err(error_from_body(status, &body));
        }

        let body = res.text().await?;
        parse_current(&body)
    }

    /// `<base_url>?key=..&q=..&aqi=no`, with space encoded as `%20` rather than `+`.
    fn request_url(&self, city: &str) -> Result<Url, WeatherError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            WeatherError::TransportFailure(format!("invalid endpoint {}: {e}", self.base_url))
        })?;

        url.set_query(Some(&format!(
            "key={}&q={}&aqi=no",
            encode_component(&self.api_key),
            encode_component(city),
        )));

        Ok(url)
    }
}

fn parse_current(body: &str) -> Result<WeatherResult, WeatherError> {
    let parsed: WaResponse =
        serde_json::from_str(body).map_err(|_| WeatherError::MalformedResponse)?;

    match (parsed.location, parsed.current) {
        (Some(location), Some(current)) => Ok(WeatherResult {
            city_name: location.name,
            temperature_c: current.temp_c,
            condition_text: current.condition.text,
        }),
        _ => Err(WeatherError::MalformedResponse),
    }
}

fn error_from_body(status: StatusCode, body: &str) -> WeatherError {
    serde_json::from_str::<WaErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .map(WeatherError::ProviderError)
        .unwrap_or(WeatherError::HttpError(status.as_u16()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
