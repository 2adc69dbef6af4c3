use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::schools::models::{NewSchool, School};
use crate::features::schools::services::proximity::RankedSchool;

/// Request DTO for adding a school.
///
/// All fields are optional at the deserialization layer so that an
/// incomplete body is answered with the service's own error message
/// instead of a serde rejection; presence is checked in
/// [`CreateSchoolDto::into_new_school`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolDto {
    #[schema(example = "Greenwood High")]
    pub name: Option<String>,

    #[schema(example = "123 Elm Street")]
    pub address: Option<String>,

    /// Degrees, in [-90, 90]
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "latitude must be between -90 and 90"
    ))]
    pub latitude: Option<f64>,

    /// Degrees, in [-180, 180]
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,
}

impl CreateSchoolDto {
    /// Checks that every field is present and non-empty, mirroring the
    /// required-field contract of the write endpoint.
    pub fn into_new_school(self) -> Result<NewSchool> {
        match (self.name, self.address, self.latitude, self.longitude) {
            (Some(name), Some(address), Some(latitude), Some(longitude))
                if !name.trim().is_empty() && !address.trim().is_empty() =>
            {
                Ok(NewSchool {
                    name,
                    address,
                    latitude,
                    longitude,
                })
            }
            _ => Err(AppError::Validation("All fields are required".to_string())),
        }
    }
}

/// Query parameters for the distance-sorted listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DistanceQuery {
    /// Latitude of the reference point, degrees
    pub latitude: Option<String>,
    /// Longitude of the reference point, degrees
    pub longitude: Option<String>,
}

impl DistanceQuery {
    /// Parses both coordinates, treating absent, non-numeric, or non-finite
    /// values as missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let latitude = Self::parse_coordinate(self.latitude.as_deref())?;
        let longitude = Self::parse_coordinate(self.longitude.as_deref())?;
        Some((latitude, longitude))
    }

    fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
        raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Response DTO for a school
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponseDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<School> for SchoolResponseDto {
    fn from(s: School) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            latitude: s.latitude,
            longitude: s.longitude,
        }
    }
}

/// Response DTO for a school augmented with its distance from the query point
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankedSchoolDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance from the reference point, kilometers
    pub distance: f64,
}

impl From<RankedSchool> for RankedSchoolDto {
    fn from(r: RankedSchool) -> Self {
        Self {
            id: r.school.id,
            name: r.school.name,
            address: r.school.address,
            latitude: r.school.latitude,
            longitude: r.school.longitude,
            distance: r.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: Option<&str>, address: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> CreateSchoolDto {
        CreateSchoolDto {
            name: name.map(Into::into),
            address: address.map(Into::into),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_into_new_school_accepts_complete_dto() {
        let new_school = dto(Some("Greenwood High"), Some("123 Elm Street"), Some(40.7128), Some(-74.0060))
            .into_new_school()
            .unwrap();

        assert_eq!(new_school.name, "Greenwood High");
        assert_eq!(new_school.latitude, 40.7128);
    }

    #[test]
    fn test_into_new_school_rejects_missing_or_empty_fields() {
        assert!(dto(None, Some("123 Elm Street"), Some(1.0), Some(2.0))
            .into_new_school()
            .is_err());
        assert!(dto(Some("Greenwood High"), Some("123 Elm Street"), Some(1.0), None)
            .into_new_school()
            .is_err());
        assert!(dto(Some("  "), Some("123 Elm Street"), Some(1.0), Some(2.0))
            .into_new_school()
            .is_err());
    }

    #[test]
    fn test_distance_query_parses_numeric_pairs() {
        let query = DistanceQuery {
            latitude: Some("40.7128".to_string()),
            longitude: Some(" -74.0060 ".to_string()),
        };

        assert_eq!(query.coordinates(), Some((40.7128, -74.0060)));
    }

    #[test]
    fn test_distance_query_rejects_missing_or_bad_values() {
        let missing = DistanceQuery {
            latitude: None,
            longitude: Some("-74.0".to_string()),
        };
        assert_eq!(missing.coordinates(), None);

        let garbage = DistanceQuery {
            latitude: Some("north".to_string()),
            longitude: Some("-74.0".to_string()),
        };
        assert_eq!(garbage.coordinates(), None);

        let non_finite = DistanceQuery {
            latitude: Some("NaN".to_string()),
            longitude: Some("inf".to_string()),
        };
        assert_eq!(non_finite.coordinates(), None);
    }
}
