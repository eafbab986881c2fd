//! Fetch response handling
//!
//! Applies responses from the background fetch worker to the model.

use std::time::Instant;

use crate::i18n::Key;
use crate::model::scan::ScanState;
use crate::services::FetchResponse;
use crate::App;

pub fn handle_fetch_response(app: &mut App, response: FetchResponse) {
    match response {
        FetchResponse::Weather(forecast) => {
            app.model.outlook.forecast = Some(forecast);
            app.model.outlook.forecast_loading = false;
        }

        FetchResponse::Prices(prices) => {
            app.model.outlook.selected_price = if prices.is_empty() { None } else { Some(0) };
            app.model.outlook.prices = Some(prices);
            app.model.outlook.prices_loading = false;
            app.model.outlook.prices_refreshed_at = Some(Instant::now());
        }

        FetchResponse::LuxReadings(readings) => {
            app.model.scan.complete(&readings);
        }

        FetchResponse::PermissionDenied => {
            // Surface as a user-facing alert, nothing else to retry
            app.model.scan.state = ScanState::Idle;
            let message = app.model.ui.tr(Key::ScanPermissionDenied).to_string();
            app.model.ui.show_alert(message);
        }
    }
}
