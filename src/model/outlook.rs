//! Outlook sub-model: simulated weather forecast and market prices

use std::time::Instant;

use crate::model::types::{DayForecast, PriceQuote};

#[derive(Clone, Debug)]
pub struct OutlookModel {
    /// Last fetched forecast, None until first fetch
    pub forecast: Option<Vec<DayForecast>>,
    pub forecast_loading: bool,

    /// Last fetched price quotes, None until first fetch
    pub prices: Option<Vec<PriceQuote>>,
    pub prices_loading: bool,

    /// Selected row in the price table
    pub selected_price: Option<usize>,

    /// When the prices were last refreshed, for the status bar
    pub prices_refreshed_at: Option<Instant>,
}

impl OutlookModel {
    pub fn new() -> Self {
        Self {
            forecast: None,
            forecast_loading: false,
            prices: None,
            prices_loading: false,
            selected_price: None,
            prices_refreshed_at: None,
        }
    }
}

impl Default for OutlookModel {
    fn default() -> Self {
        Self::new()
    }
}
