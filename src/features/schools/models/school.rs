use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a school
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct School {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    /// Degrees, in [-90, 90]
    pub latitude: f64,
    /// Degrees, in [-180, 180]
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a school, validated at the request boundary
#[derive(Debug, Clone)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
