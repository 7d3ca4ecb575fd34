use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

use crate::{WeatherError, WeatherResult};

pub mod weatherapi;

pub use weatherapi::WeatherApiFetcher;

/// One round trip to a weather provider for a single city.
///
/// Implementations do not cache or retry: every call is a fresh request.
/// `city` is already trimmed and non-empty.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, WeatherError>;
}

#[async_trait]
impl<T: WeatherFetcher + ?Sized> WeatherFetcher for Arc<T> {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, WeatherError> {
        (**self).fetch_weather(city).await
    }
}
