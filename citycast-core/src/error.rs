use thiserror::Error;

/// Everything that can keep a query from reaching the `Success` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// Submitted city was empty or whitespace; never reaches the fetcher.
    #[error("Please enter a city name.")]
    EmptyInput,

    /// The provider answered with a structured `{ error: { message } }` body.
    #[error("{0}")]
    ProviderError(String),

    /// Non-success status without a parseable provider error.
    #[error("HTTP error! status: {0}")]
    HttpError(u16),

    /// Success status, but the body lacks `location` or `current`.
    #[error("Could not retrieve weather data")]
    MalformedResponse,

    /// DNS, connect or read failure below HTTP.
    #[error("{0}")]
    TransportFailure(String),
}

impl WeatherError {
    /// Text shown in the message area when a query ends in this error.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::EmptyInput => self.to_string(),
            WeatherError::MalformedResponse => {
                "Could not retrieve weather data. Please try a different city.".to_string()
            }
            WeatherError::ProviderError(_)
            | WeatherError::HttpError(_)
            | WeatherError::TransportFailure(_) => {
                let detail = self.to_string();
                format!("Error: {}. Please try again.", detail.trim_end().trim_end_matches('.'))
            }
        }
    }
}

// Transport messages never include the request URL: it carries the API key.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::TransportFailure(err.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_is_not_double_punctuated() {
        let err = WeatherError::ProviderError("No matching location found.".into());
        assert_eq!(err.user_message(), "Error: No matching location found. Please try again.");
    }

    #[test]
    fn provider_message_without_period_gets_one() {
        let err = WeatherError::ProviderError("API key is invalid".into());
        assert_eq!(err.user_message(), "Error: API key is invalid. Please try again.");
    }

    #[test]
    fn http_error_carries_status() {
        let err = WeatherError::HttpError(502);
        assert_eq!(err.user_message(), "Error: HTTP error! status: 502. Please try again.");
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(WeatherError::EmptyInput.user_message(), "Please enter a city name.");
        assert_eq!(
            WeatherError::MalformedResponse.user_message(),
            "Could not retrieve weather data. Please try a different city."
        );
    }

    #[test]
    fn transport_failure_surfaces_underlying_message() {
        let err = WeatherError::TransportFailure("connection refused".into());
        assert_eq!(err.user_message(), "Error: connection refused. Please try again.");
    }
}
