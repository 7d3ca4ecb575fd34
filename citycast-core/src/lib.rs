//! Core library for the `citycast` weather widget.
//!
//! This crate defines:
//! - Icon selection from free-form condition text
//! - A fetcher abstraction over the WeatherAPI.com current-conditions endpoint
//! - The view controller that turns user input into renderable view state
//! - Configuration & credentials handling
//!
//! It has no knowledge of how a view is drawn; `citycast-cli` provides a
//! terminal view, but any [`WeatherView`] implementation can be plugged in.

pub mod config;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod icon;
pub mod model;

pub use config::Config;
pub use controller::{Key, SubmitOutcome, ViewController, WeatherView};
pub use error::WeatherError;
pub use fetcher::{WeatherApiFetcher, WeatherFetcher};
pub use icon::{IconVariant, select_icon};
pub use model::{QueryState, ResultPanel, Transition, ViewModel, WeatherResult};
