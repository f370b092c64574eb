//! Geosubmit v2 request body
//!
//! Optional fields are left out of the JSON entirely when unset, and so are
//! empty sighting lists.

use crate::types::{self, CellRadio, PositionSource};
use serde::Serialize;

/// Top-level request body
#[derive(Debug, Clone, Serialize)]
pub struct Payload<'a> {
    /// Reports in this batch
    pub items: &'a [Report],
}

/// A single report as sent to the service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Position fix
    pub position: Position,
    /// Wi-Fi sightings, absent when there are none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_access_points: Option<Vec<WifiAccessPoint>>,
    /// Cell sightings, absent when there are none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_towers: Option<Vec<CellTower>>,
    /// Bluetooth sightings, absent when there are none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth_beacons: Option<Vec<BluetoothBeacon>>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PositionSource>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiAccessPoint {
    pub mac_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_to_noise_ratio: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellTower {
    pub radio_type: CellRadio,
    pub mobile_country_code: u16,
    pub mobile_network_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_area_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asu: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_scrambling_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_advance: Option<i32>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BluetoothBeacon {
    pub mac_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<i32>,
}

/// Convert a list, mapping empty to `None`
fn non_empty<'a, T, U: From<&'a T>>(items: &'a [T]) -> Option<Vec<U>> {
    if items.is_empty() {
        None
    } else {
        Some(items.iter().map(U::from).collect())
    }
}

impl From<&types::Report> for Report {
    fn from(report: &types::Report) -> Self {
        Self {
            timestamp: report.timestamp.timestamp_millis(),
            position: Position::from(&report.position),
            wifi_access_points: non_empty(&report.wifi_access_points),
            cell_towers: non_empty(&report.cell_towers),
            bluetooth_beacons: non_empty(&report.bluetooth_beacons),
        }
    }
}

impl From<&types::Position> for Position {
    fn from(p: &types::Position) -> Self {
        Self {
            latitude: p.latitude,
            longitude: p.longitude,
            accuracy: p.accuracy,
            age: p.age,
            altitude: p.altitude,
            altitude_accuracy: p.altitude_accuracy,
            heading: p.heading,
            pressure: p.pressure,
            speed: p.speed,
            source: p.source,
        }
    }
}

impl From<&types::WifiAccessPoint> for WifiAccessPoint {
    fn from(ap: &types::WifiAccessPoint) -> Self {
        Self {
            mac_address: ap.mac_address.clone(),
            radio_type: ap.radio_type.clone(),
            age: ap.age,
            channel: ap.channel,
            frequency: ap.frequency,
            signal_strength: ap.signal_strength,
            signal_to_noise_ratio: ap.signal_to_noise_ratio,
            ssid: ap.ssid.clone(),
        }
    }
}

impl From<&types::CellTower> for CellTower {
    fn from(cell: &types::CellTower) -> Self {
        Self {
            radio_type: cell.radio_type,
            mobile_country_code: cell.mobile_country_code,
            mobile_network_code: cell.mobile_network_code,
            location_area_code: cell.location_area_code,
            cell_id: cell.cell_id,
            age: cell.age,
            asu: cell.asu,
            primary_scrambling_code: cell.primary_scrambling_code,
            // The API takes 0/1 here
            serving: cell.serving.map(u8::from),
            signal_strength: cell.signal_strength,
            timing_advance: cell.timing_advance,
        }
    }
}

impl From<&types::BluetoothBeacon> for BluetoothBeacon {
    fn from(beacon: &types::BluetoothBeacon) -> Self {
        Self {
            mac_address: beacon.mac_address.clone(),
            age: beacon.age,
            name: beacon.name.clone(),
            signal_strength: beacon.signal_strength,
        }
    }
}
