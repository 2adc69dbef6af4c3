//! Great-circle ranking of schools around a reference point.
//!
//! Pure computation: no storage access, no shared state. The surrounding
//! handler layer validates the reference coordinates before calling in.

use crate::features::schools::models::School;

/// Earth's mean radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A school together with its distance from the query point.
///
/// The distance is derived per request and never written back to storage.
#[derive(Debug, Clone)]
pub struct RankedSchool {
    pub school: School,
    /// Great-circle distance from the reference point, kilometers
    pub distance: f64,
}

/// Haversine great-circle distance between two coordinate pairs, in km.
///
/// Uses the atan2 form, which stays numerically stable for near-antipodal
/// points where the asin form loses precision.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Ranks schools by ascending distance from the reference point.
///
/// The sort is stable: schools at equal distance keep their input order.
pub fn rank_by_distance(ref_lat: f64, ref_lon: f64, schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance =
                haversine_distance(ref_lat, ref_lon, school.latitude, school.longitude);
            RankedSchool { school, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fake::faker::address::en::StreetName;
    use fake::faker::company::en::CompanyName;
    use fake::Fake;
    use uuid::Uuid;

    fn school(name: &str, latitude: f64, longitude: f64) -> School {
        School {
            id: Uuid::now_v7(),
            name: name.to_string(),
            address: StreetName().fake(),
            latitude,
            longitude,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_haversine_known_distance() {
        // Lower Manhattan to Brooklyn, approx 6.1km great-circle
        let distance = haversine_distance(40.7128, -74.0060, 40.7306, -73.9352);

        assert!((distance - 6.1).abs() < 0.2, "got {distance}");
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let distance = haversine_distance(40.7128, -74.0060, 40.7128, -74.0060);

        assert!(distance < 1e-9);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let ab = haversine_distance(40.7128, -74.0060, -6.2088, 106.8456);
        let ba = haversine_distance(-6.2088, 106.8456, 40.7128, -74.0060);

        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_near_antipodal_is_finite() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 179.9999);

        assert!(distance.is_finite());
        // Half the Earth's circumference, give or take
        assert!(distance > 20_000.0 && distance < 20_100.0);
    }

    #[test]
    fn test_rank_by_distance_orders_ascending() {
        let reference = (40.7128, -74.0060);
        let schools = vec![
            school("Far", 40.8222, -73.9439),
            school("Near", 40.7306, -73.9352),
            school("Here", 40.7128, -74.0060),
        ];

        let ranked = rank_by_distance(reference.0, reference.1, schools);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].school.name, "Here");
        assert_eq!(ranked[1].school.name, "Near");
        assert_eq!(ranked[2].school.name, "Far");
        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_rank_by_distance_preserves_length() {
        let schools: Vec<School> = (0..25)
            .map(|i| {
                let name: String = CompanyName().fake();
                school(&name, -30.0 + i as f64, 10.0 + i as f64)
            })
            .collect();

        let ranked = rank_by_distance(52.52, 13.405, schools);

        assert_eq!(ranked.len(), 25);
    }

    #[test]
    fn test_rank_by_distance_is_stable_on_ties() {
        // East and west of the reference by the same longitude offset, so
        // both compute the exact same distance.
        let schools = vec![
            school("West", 0.0, -1.0),
            school("East", 0.0, 1.0),
        ];

        let ranked = rank_by_distance(0.0, 0.0, schools);

        assert_eq!(ranked[0].distance.to_bits(), ranked[1].distance.to_bits());
        assert_eq!(ranked[0].school.name, "West");
        assert_eq!(ranked[1].school.name, "East");
    }
}
