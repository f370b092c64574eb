//! Test data factories for geosubmit-upload types
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use geosubmit_upload::types::{
    BluetoothBeacon, CellRadio, CellTower, Position, PositionSource, Report, WifiAccessPoint,
};

/// A GPS fix in Helsinki
pub fn make_position() -> Position {
    Position {
        latitude: 60.1699,
        longitude: 24.9384,
        accuracy: Some(8.0),
        altitude: Some(21.0),
        source: Some(PositionSource::Gps),
        ..Position::default()
    }
}

/// Create a pending report with no sightings
pub fn make_report() -> Report {
    Report::new(Utc::now() - Duration::minutes(5), make_position())
}

/// Create `n` pending reports
pub fn make_reports(n: usize) -> Vec<Report> {
    (0..n).map(|_| make_report()).collect()
}

/// Create a pending report with one sighting of each kind
pub fn make_report_with_sightings() -> Report {
    let mut report = make_report();
    report.wifi_access_points.push(WifiAccessPoint {
        mac_address: "01:23:45:67:89:ab".to_string(),
        frequency: Some(2412),
        signal_strength: Some(-61),
        ..WifiAccessPoint::default()
    });
    report.cell_towers.push(CellTower {
        radio_type: CellRadio::Lte,
        mobile_country_code: 244,
        mobile_network_code: 5,
        location_area_code: Some(6001),
        cell_id: Some(7_654_321),
        age: Some(1200),
        asu: None,
        primary_scrambling_code: Some(301),
        serving: Some(true),
        signal_strength: Some(-88),
        timing_advance: None,
    });
    report.bluetooth_beacons.push(BluetoothBeacon {
        mac_address: "ff:ee:dd:cc:bb:aa".to_string(),
        signal_strength: Some(-77),
        ..BluetoothBeacon::default()
    });
    report
}

/// Create a report that was already uploaded
pub fn make_uploaded_report() -> Report {
    Report {
        uploaded: true,
        uploaded_at: Some(Utc::now() - Duration::hours(1)),
        ..make_report()
    }
}
