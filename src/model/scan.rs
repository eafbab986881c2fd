//! Scan sub-model: indoor light scan state

use crate::model::types::LightQuality;

/// State of the simulated light sensor scan
#[derive(Clone, Debug, PartialEq)]
pub enum ScanState {
    /// No scan yet this session
    Idle,
    /// Waiting for the sensor service to deliver readings
    Scanning,
    /// Readings arrived, bucketed into quality labels
    Done {
        readings: Vec<(f64, LightQuality)>,
        average_lux: f64,
        quality: LightQuality,
    },
}

#[derive(Clone, Debug)]
pub struct ScanModel {
    pub state: ScanState,
}

impl ScanModel {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
        }
    }

    /// Record a completed scan from raw lux readings
    pub fn complete(&mut self, lux_readings: &[f64]) {
        let readings: Vec<(f64, LightQuality)> = lux_readings
            .iter()
            .map(|&lux| (lux, crate::logic::light::bucket_lux(lux)))
            .collect();

        let average_lux = if lux_readings.is_empty() {
            0.0
        } else {
            lux_readings.iter().sum::<f64>() / lux_readings.len() as f64
        };

        let quality = crate::logic::light::bucket_lux(average_lux);

        self.state = ScanState::Done {
            readings,
            average_lux,
            quality,
        };
    }
}

impl Default for ScanModel {
    fn default() -> Self {
        Self::new()
    }
}
