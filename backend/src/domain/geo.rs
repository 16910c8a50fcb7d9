//! Geographic value objects and great-circle distance.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. That is accurate to well under a metre at the city
//! scale the geofence and nearby search operate on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by [`distance_in_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Keeps boundary points inside the box despite rounding in the trigonometry.
const BOX_PADDING_DEGREES: f64 = 1e-9;

/// Validation errors raised when constructing a [`Coordinate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoValidationError {
    InvalidLatitude { value: f64 },
    InvalidLongitude { value: f64 },
}

impl fmt::Display for GeoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "latitude must be a finite value in [-90, 90], got {value}")
            }
            Self::InvalidLongitude { value } => write!(
                f,
                "longitude must be a finite value in [-180, 180], got {value}"
            ),
        }
    }
}

impl std::error::Error for GeoValidationError {}

/// A validated latitude/longitude pair in decimal degrees.
///
/// ## Invariants
/// - `latitude` is finite and within `[-90, 90]`.
/// - `longitude` is finite and within `[-180, 180]`.
///
/// # Examples
/// ```
/// use gym_checkin::domain::Coordinate;
///
/// let gym = Coordinate::new(-23.3045386, -51.1689972)?;
/// assert_eq!(gym.latitude(), -23.3045386);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// # Ok::<(), gym_checkin::domain::GeoValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "CoordinateDto", into = "CoordinateDto")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Validate and construct a coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoValidationError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoValidationError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoValidationError::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoordinateDto {
    latitude: f64,
    longitude: f64,
}

impl From<Coordinate> for CoordinateDto {
    fn from(value: Coordinate) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

impl TryFrom<CoordinateDto> for Coordinate {
    type Error = GeoValidationError;

    fn try_from(value: CoordinateDto) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude)
    }
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Returns exactly `0.0` for identical coordinates and is symmetric in its
/// arguments.
///
/// # Examples
/// ```
/// use gym_checkin::domain::{Coordinate, distance_in_km};
///
/// let gym = Coordinate::new(-23.3045386, -51.1689972)?;
/// let user = Coordinate::new(-23.3028871, -51.231772)?;
/// assert_eq!(distance_in_km(gym, gym), 0.0);
/// assert!(distance_in_km(gym, user) > 6.0);
/// # Ok::<(), gym_checkin::domain::GeoValidationError>(())
/// ```
pub fn distance_in_km(from: Coordinate, to: Coordinate) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Latitude/longitude box enclosing every point within a radius of a centre.
///
/// The box is a coarse pre-filter: it may include points further than the
/// radius but never excludes one within it. Near the poles, or when the
/// span would cross the antimeridian, the longitude range widens to the full
/// `[-180, 180]`.
///
/// # Examples
/// ```
/// use gym_checkin::domain::{Coordinate, GeoBox};
///
/// let centre = Coordinate::new(-23.3045386, -51.1689972)?;
/// let bounds = GeoBox::around(centre, 10.0);
/// assert!(bounds.contains(centre));
/// assert!(!bounds.contains(Coordinate::new(-22.0, -51.1689972)?));
/// # Ok::<(), gym_checkin::domain::GeoValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBox {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl GeoBox {
    /// Build the box around `centre` for a non-negative `radius_km`.
    pub fn around(centre: Coordinate, radius_km: f64) -> Self {
        let angular = radius_km.max(0.0) / EARTH_RADIUS_KM;
        let lat_span = angular.to_degrees() + BOX_PADDING_DEGREES;
        let min_lat = centre.latitude - lat_span;
        let max_lat = centre.latitude + lat_span;

        if min_lat <= -90.0 || max_lat >= 90.0 || angular >= std::f64::consts::FRAC_PI_2 {
            return Self {
                min_lat: min_lat.max(-90.0),
                max_lat: max_lat.min(90.0),
                min_lng: -180.0,
                max_lng: 180.0,
            };
        }

        let ratio = angular.sin() / centre.latitude.to_radians().cos();
        let (min_lng, max_lng) = if ratio >= 1.0 {
            (-180.0, 180.0)
        } else {
            let lng_span = ratio.asin().to_degrees() + BOX_PADDING_DEGREES;
            let min_lng = centre.longitude - lng_span;
            let max_lng = centre.longitude + lng_span;
            if min_lng < -180.0 || max_lng > 180.0 {
                (-180.0, 180.0)
            } else {
                (min_lng, max_lng)
            }
        };

        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Whether `point` falls inside the box, edges included.
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lng..=self.max_lng).contains(&point.longitude)
    }

    /// Returns bounds as `[min_lng, min_lat, max_lng, max_lat]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.min_lng, self.min_lat, self.max_lng, self.max_lat]
    }
}

#[cfg(test)]
#[path = "geo_tests.rs"]
mod tests;
