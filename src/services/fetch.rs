//! Simulated data fetch service
//!
//! Stands in for the backends the product does not have: weather, mandi
//! prices, and the light sensor. Each request is answered after a fixed
//! simulated delay with freshly generated mock data, delivered over an
//! unbounded channel the frame loop drains non-blockingly.

use chrono::{Datelike, Local};
use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

use crate::data;
use crate::model::types::{DayForecast, PriceQuote, WeatherCondition};

/// Requests the UI can make of the fetch worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Weather,
    Prices,
    LuxScan,
}

/// Responses delivered back to the frame loop
#[derive(Debug, Clone)]
pub enum FetchResponse {
    Weather(Vec<DayForecast>),
    Prices(Vec<PriceQuote>),
    LuxReadings(Vec<f64>),
    /// The simulated sensor permission was denied
    PermissionDenied,
}

/// Number of simulated lux samples per scan
const SCAN_SAMPLES: usize = 5;

/// Number of forecast days
const FORECAST_DAYS: usize = 5;

/// Spawn the fetch worker task
///
/// Every request sleeps for `delay` before responding, imitating network
/// latency. When `simulate_permission_denied` is set, LuxScan requests
/// answer with PermissionDenied instead of readings.
pub fn spawn_fetch_service(
    delay: Duration,
    simulate_permission_denied: bool,
) -> (
    mpsc::UnboundedSender<FetchRequest>,
    mpsc::UnboundedReceiver<FetchResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<FetchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<FetchResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            sleep(delay).await;

            let response = match request {
                FetchRequest::Weather => FetchResponse::Weather(generate_forecast()),
                FetchRequest::Prices => FetchResponse::Prices(generate_prices()),
                FetchRequest::LuxScan => {
                    if simulate_permission_denied {
                        FetchResponse::PermissionDenied
                    } else {
                        FetchResponse::LuxReadings(generate_lux_readings())
                    }
                }
            };

            if response_tx.send(response).is_err() {
                // Receiver dropped, app is shutting down
                break;
            }
        }
    });

    (request_tx, response_rx)
}

fn generate_forecast() -> Vec<DayForecast> {
    let mut rng = rand::rng();
    let today = Local::now();

    (0..FORECAST_DAYS)
        .map(|offset| {
            let date = today + chrono::Duration::days(offset as i64);
            let condition = match rng.random_range(0..10) {
                0..=3 => WeatherCondition::Sunny,
                4..=5 => WeatherCondition::PartlyCloudy,
                6..=7 => WeatherCondition::Cloudy,
                8 => WeatherCondition::Rain,
                _ => WeatherCondition::Thunderstorm,
            };

            let high_c = rng.random_range(26..=38);
            let low_c = high_c - rng.random_range(6..=12);
            let rain_pct = match condition {
                WeatherCondition::Sunny => rng.random_range(0..10),
                WeatherCondition::PartlyCloudy => rng.random_range(5..25),
                WeatherCondition::Cloudy => rng.random_range(20..50),
                WeatherCondition::Rain => rng.random_range(60..90),
                WeatherCondition::Thunderstorm => rng.random_range(80..100),
            };

            DayForecast {
                day: format!("{} {}", date.format("%a"), date.day()),
                condition,
                high_c,
                low_c,
                humidity_pct: rng.random_range(40..95),
                rain_pct,
                tip: data::care_tip_for(condition).to_string(),
            }
        })
        .collect()
}

fn generate_prices() -> Vec<PriceQuote> {
    let mut rng = rand::rng();

    data::commodities()
        .iter()
        .map(|base| {
            // Day-to-day drift of up to ±15% around the usual modal price
            let drift = rng.random_range(-15..=15) as i64;
            let modal = (base.base_rs as i64 * (100 + drift) / 100).max(100) as u32;
            let min_rs = modal - modal / 10;
            let max_rs = modal + modal / 8;

            PriceQuote {
                commodity: base.name.to_string(),
                yard: base.yard.to_string(),
                min_rs,
                max_rs,
                modal_rs: modal,
            }
        })
        .collect()
}

fn generate_lux_readings() -> Vec<f64> {
    let mut rng = rand::rng();

    // One spot, several samples: pick a base level, jitter each sample
    let base = rng.random_range(100.0..8000.0);
    (0..SCAN_SAMPLES)
        .map(|_| (base * rng.random_range(0.85..1.15_f64)).max(0.0))
        .collect()
}
