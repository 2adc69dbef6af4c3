//! School service - storage access and distance-sorted listing

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::schools::models::{NewSchool, School};
use crate::features::schools::services::proximity::{self, RankedSchool};

/// Bundled sample schools, inserted verbatim by the bulk-seed endpoint
const SAMPLE_SCHOOLS: [(&str, &str, f64, f64); 15] = [
    ("Greenwood High", "123 Elm Street", 40.7128, -74.0060),
    ("Springfield Academy", "456 Maple Ave", 40.7306, -73.9352),
    ("Lakeside School", "789 Oak Blvd", 40.7412, -73.9896),
    ("Sunshine Public School", "321 Pine Rd", 40.7549, -73.9840),
    ("Mountainview School", "654 Cedar Lane", 40.7580, -73.9855),
    ("Riverdale High", "987 Birch Street", 40.7624, -73.9745),
    ("Hilltop Academy", "852 Walnut Ave", 40.7698, -73.9815),
    ("Valley View School", "963 Chestnut St", 40.7781, -73.9629),
    ("Harbor School", "159 Bay Rd", 40.7831, -73.9712),
    ("Sunset Elementary", "753 Park Lane", 40.7900, -73.9754),
    ("Meadowbrook High", "852 Lake Ave", 40.7967, -73.9503),
    ("Westwood Academy", "357 Valley Rd", 40.8032, -73.9568),
    ("Brookside School", "741 Willow St", 40.8100, -73.9645),
    ("Pinecrest Academy", "268 Highland Ave", 40.8169, -73.9532),
    ("New Horizon School", "974 Summit Blvd", 40.8222, -73.9439),
];

/// Service for school storage and lookups
pub struct SchoolService {
    pool: PgPool,
}

impl SchoolService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all schools in insertion order.
    ///
    /// Ids are UUID v7, so ordering by id is ordering by insertion time.
    pub async fn list(&self) -> Result<Vec<School>> {
        sqlx::query_as::<_, School>(
            r#"
            SELECT id, name, address, latitude, longitude, created_at, updated_at
            FROM schools
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list schools: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Insert a single school
    pub async fn create(&self, new_school: NewSchool) -> Result<School> {
        let school = sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (id, name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, address, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&new_school.name)
        .bind(&new_school.address)
        .bind(new_school.latitude)
        .bind(new_school.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert school: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("School added: id={}, name={}", school.id, school.name);

        Ok(school)
    }

    /// Bulk-insert the bundled sample schools
    pub async fn seed_samples(&self) -> Result<u64> {
        let mut query_builder =
            QueryBuilder::new("INSERT INTO schools (id, name, address, latitude, longitude) ");

        query_builder.push_values(
            SAMPLE_SCHOOLS.iter(),
            |mut b, (name, address, latitude, longitude)| {
                b.push_bind(Uuid::now_v7())
                    .push_bind(*name)
                    .push_bind(*address)
                    .push_bind(*latitude)
                    .push_bind(*longitude);
            },
        );

        let inserted = query_builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to seed sample schools: {:?}", e);
                AppError::Database(e)
            })?
            .rows_affected();

        tracing::info!("Seeded {} sample schools", inserted);

        Ok(inserted)
    }

    /// Fetch all schools and rank them by distance from the reference point
    pub async fn list_by_distance(&self, latitude: f64, longitude: f64) -> Result<Vec<RankedSchool>> {
        let schools = self.list().await?;

        Ok(proximity::rank_by_distance(latitude, longitude, schools))
    }
}
