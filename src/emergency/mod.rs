//! Emergency services directory and the FIR (police report) form.
//!
//! Dialling and map lookups are left to the device and the mapping
//! service; this module only describes them: numbers, `tel:` links and the
//! nearby-search request each service would issue.

pub mod fir;

use serde::Serialize;
use std::fmt;

/// Alert shown when the device refuses to share its location.
pub const GEOLOCATION_DENIED: &str = "Please enable location services to use emergency features.";

/// Search radius around the user for nearby services, in metres.
pub const NEARBY_RADIUS_M: u32 = 5000;

/// Map centre used before the device location is known.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 20.5937,
    lng: 78.9629,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmergencyService {
    Police,
    Ambulance,
    Fire,
}

impl EmergencyService {
    pub const ALL: [EmergencyService; 3] = [
        EmergencyService::Police,
        EmergencyService::Ambulance,
        EmergencyService::Fire,
    ];

    pub fn number(&self) -> &'static str {
        match self {
            EmergencyService::Police => "100",
            EmergencyService::Ambulance => "108",
            EmergencyService::Fire => "101",
        }
    }

    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.number())
    }

    /// Place type used when searching for this service on the map.
    pub fn place_type(&self) -> &'static str {
        match self {
            EmergencyService::Police => "police",
            EmergencyService::Ambulance => "hospital",
            EmergencyService::Fire => "fire_station",
        }
    }

    /// Nearby-search request for this service around `center`.
    pub fn nearby_search(&self, center: Option<Coordinate>) -> NearbySearch {
        NearbySearch {
            place_type: self.place_type(),
            radius_m: NEARBY_RADIUS_M,
            center: center.unwrap_or(DEFAULT_CENTER),
        }
    }
}

impl fmt::Display for EmergencyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmergencyService::Police => "Police",
            EmergencyService::Ambulance => "Ambulance",
            EmergencyService::Fire => "Fire",
        };
        f.write_str(name)
    }
}

/// A places query as handed to the mapping service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbySearch {
    pub place_type: &'static str,
    pub radius_m: u32,
    pub center: Coordinate,
}

/// Directions link from the user's position to a place.
pub fn directions_url(destination: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        destination.lat, destination.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(EmergencyService::Police.number(), "100");
        assert_eq!(EmergencyService::Ambulance.number(), "108");
        assert_eq!(EmergencyService::Fire.number(), "101");
        assert_eq!(EmergencyService::Ambulance.tel_link(), "tel:108");
    }

    #[test]
    fn test_nearby_search_defaults_to_india() {
        let search = EmergencyService::Fire.nearby_search(None);
        assert_eq!(search.place_type, "fire_station");
        assert_eq!(search.radius_m, 5000);
        assert_eq!(search.center, DEFAULT_CENTER);

        let here = Coordinate { lat: 19.07, lng: 72.87 };
        assert_eq!(EmergencyService::Police.nearby_search(Some(here)).center, here);
    }

    #[test]
    fn test_directions_url() {
        let url = directions_url(Coordinate { lat: 28.6, lng: 77.2 });
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=28.6,77.2"
        );
    }
}
