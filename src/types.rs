//! Core types for geosubmit-upload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identity of a stored report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub Uuid);

impl ReportId {
    /// Generate a new random report ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A locally stored observation report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Report ID
    pub id: ReportId,
    /// When the observation was made
    pub timestamp: DateTime<Utc>,
    /// Position fix at observation time
    pub position: Position,
    /// Wi-Fi access points seen
    #[serde(default)]
    pub wifi_access_points: Vec<WifiAccessPoint>,
    /// Cell towers seen
    #[serde(default)]
    pub cell_towers: Vec<CellTower>,
    /// Bluetooth beacons seen
    #[serde(default)]
    pub bluetooth_beacons: Vec<BluetoothBeacon>,
    /// Whether the report has been accepted by the remote service
    #[serde(default)]
    pub uploaded: bool,
    /// When the report was marked uploaded
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Report {
    /// Create a pending report with no sightings
    pub fn new(timestamp: DateTime<Utc>, position: Position) -> Self {
        Self {
            id: ReportId::new(),
            timestamp,
            position,
            wifi_access_points: Vec::new(),
            cell_towers: Vec::new(),
            bluetooth_beacons: Vec::new(),
            uploaded: false,
            uploaded_at: None,
        }
    }

    /// Whether this report still needs uploading
    pub const fn is_pending(&self) -> bool {
        !self.uploaded
    }
}

/// Source of a position fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSource {
    /// Satellite fix
    Gps,
    /// Fused provider (satellite, network and sensors)
    Fused,
    /// Entered by the user
    Manual,
}

/// Position fix attached to a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Horizontal accuracy in meters
    #[serde(default)]
    pub accuracy: Option<f64>,
    /// Altitude in meters
    #[serde(default)]
    pub altitude: Option<f64>,
    /// Vertical accuracy in meters
    #[serde(default)]
    pub altitude_accuracy: Option<f64>,
    /// Heading in degrees from true north
    #[serde(default)]
    pub heading: Option<f64>,
    /// Speed in m/s
    #[serde(default)]
    pub speed: Option<f64>,
    /// Air pressure in hPa
    #[serde(default)]
    pub pressure: Option<f64>,
    /// Where the fix came from
    #[serde(default)]
    pub source: Option<PositionSource>,
    /// Age of the fix relative to the report timestamp, in milliseconds
    #[serde(default)]
    pub age: Option<i64>,
}

/// A Wi-Fi access point sighting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WifiAccessPoint {
    /// BSSID
    pub mac_address: String,
    /// 802.11 standard, e.g. "802.11ac"
    #[serde(default)]
    pub radio_type: Option<String>,
    /// Milliseconds between the sighting and the report timestamp
    #[serde(default)]
    pub age: Option<i64>,
    /// Channel number
    #[serde(default)]
    pub channel: Option<u32>,
    /// Frequency in MHz
    #[serde(default)]
    pub frequency: Option<u32>,
    /// Received signal strength in dBm
    #[serde(default)]
    pub signal_strength: Option<i32>,
    /// Signal to noise ratio in dB
    #[serde(default)]
    pub signal_to_noise_ratio: Option<i32>,
    /// Network name
    #[serde(default)]
    pub ssid: Option<String>,
}

/// Cellular radio technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellRadio {
    /// 2G
    Gsm,
    /// 3G
    Wcdma,
    /// 4G
    Lte,
    /// 5G
    Nr,
}

/// A cell tower sighting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellTower {
    /// Radio technology
    pub radio_type: CellRadio,
    /// MCC
    pub mobile_country_code: u16,
    /// MNC
    pub mobile_network_code: u16,
    /// LAC / TAC
    #[serde(default)]
    pub location_area_code: Option<u32>,
    /// Cell identity
    #[serde(default)]
    pub cell_id: Option<u64>,
    /// Milliseconds between the sighting and the report timestamp
    #[serde(default)]
    pub age: Option<i64>,
    /// Arbitrary strength unit
    #[serde(default)]
    pub asu: Option<i32>,
    /// PSC / PCI
    #[serde(default)]
    pub primary_scrambling_code: Option<u32>,
    /// Whether this is the serving cell
    #[serde(default)]
    pub serving: Option<bool>,
    /// Received signal strength in dBm
    #[serde(default)]
    pub signal_strength: Option<i32>,
    /// Timing advance
    #[serde(default)]
    pub timing_advance: Option<i32>,
}

/// A Bluetooth beacon sighting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BluetoothBeacon {
    /// Beacon MAC address
    pub mac_address: String,
    /// Milliseconds between the sighting and the report timestamp
    #[serde(default)]
    pub age: Option<i64>,
    /// Advertised name
    #[serde(default)]
    pub name: Option<String>,
    /// Received signal strength in dBm
    #[serde(default)]
    pub signal_strength: Option<i32>,
}

/// Result of one submission pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Batch accepted and marked uploaded
    Succeeded,
    /// Nothing pending, no request made
    NoWorkNeeded,
    /// Submit failed with a transient error; try again later
    RetryableFailure,
    /// Submit failed in a way retrying won't fix
    TerminalFailure,
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Succeeded => "succeeded",
            Self::NoWorkNeeded => "nothing to upload",
            Self::RetryableFailure => "failed (will retry)",
            Self::TerminalFailure => "failed",
        };
        write!(f, "{s}")
    }
}
