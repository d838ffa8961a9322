use serde::Deserialize;

use crate::error::AppError;

/// Device type tag the Envoy uses for its integrated meter entries.
const METER_KIND_EIM: &str = "eim";
/// Measurement type tag on the whole-house consumption meter entry.
const TOTAL_CONSUMPTION: &str = "total-consumption";

/// One report from the Envoy's `/production.json` endpoint.
///
/// Every field the appliance may omit defaults to its zero value, so a
/// sparse report still decodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Reading {
    pub production: Vec<EnergyMeter>,
    pub consumption: Vec<EnergyMeter>,
    pub storage: Vec<StorageMeter>,
}

/// A production or consumption entry: either the per-panel inverter rollup
/// or one of the Envoy's integrated current-transformer meters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyMeter {
    #[serde(rename = "type")]
    pub kind: String,
    pub active_count: u32,
    pub measurement_type: String,
    /// Epoch seconds of the reading.
    pub reading_time: i64,
    pub w_now: f64,
    pub wh_lifetime: f64,
    pub varh_lead_lifetime: f64,
    pub varh_lag_lifetime: f64,
    pub vah_lifetime: f64,
    pub rms_current: f64,
    pub rms_voltage: f64,
    pub react_pwr: f64,
    pub apprnt_pwr: f64,
    pub pwr_factor: f64,
    pub wh_today: f64,
    pub wh_last_seven_days: f64,
    pub vah_today: f64,
    pub varh_lead_today: f64,
    pub varh_lag_today: f64,
}

/// A battery entry in the report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageMeter {
    #[serde(rename = "type")]
    pub kind: String,
    pub active_count: u32,
    pub reading_time: i64,
    pub w_now: i64,
    pub wh_now: i64,
    pub state: String,
    pub percent_full: u32,
}

impl Reading {
    /// The aggregate production meter: the `eim` entry when the report is
    /// tagged, otherwise the slot the Envoy has always reported it in. A
    /// report with neither yields a recoverable error, never a panic.
    pub fn production_meter(&self) -> Result<&EnergyMeter, AppError> {
        self.production
            .iter()
            .find(|m| m.kind == METER_KIND_EIM)
            .or_else(|| self.production.get(1))
            .ok_or(AppError::MissingMeter("production"))
    }

    /// The aggregate (whole-house) consumption meter.
    pub fn consumption_meter(&self) -> Result<&EnergyMeter, AppError> {
        self.consumption
            .iter()
            .find(|m| m.measurement_type == TOTAL_CONSUMPTION)
            .or_else(|| self.consumption.first())
            .ok_or(AppError::MissingMeter("consumption"))
    }
}
