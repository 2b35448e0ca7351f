//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use spatial_core::{
    NewPoint, NewPolygon, Point, PointStore, Polygon, PolygonStore, RecordKind, SchemaStore,
    SpatialError,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_url);

        let in_memory = is_in_memory(database_url);
        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        if !in_memory {
            // Create parent directory if needed
            let filename = options.clone().get_filename().to_path_buf();
            if let Some(parent) = filename.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create database directory: {}", parent.display())
                    })?;
                }
            }
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        // Every connection to `:memory:` opens its own empty database, so an
        // in-memory pool must hold exactly one connection for its whole life.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_url)
            })?;

        tracing::info!("SQLite connection established");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn db_err(e: sqlx::Error) -> SpatialError {
    SpatialError::Database(e.to_string())
}

#[async_trait]
impl SchemaStore for Database {
    async fn initialize(&self) -> spatial_core::Result<()> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS point_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL CHECK (length(name) <= 100),
                latitude REAL NOT NULL,
                longitude REAL NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS polygon_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL CHECK (length(name) <= 100),
                coordinates TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;

        tracing::info!("Schema ready: point_data, polygon_data");
        Ok(())
    }
}

#[async_trait]
impl PointStore for Database {
    async fn insert_point(&self, point: &NewPoint) -> spatial_core::Result<i64> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let id = sqlx::query(
            r#"
            INSERT INTO point_data (name, latitude, longitude)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&point.name)
        .bind(point.latitude)
        .bind(point.longitude)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?
        .last_insert_rowid();

        tx.commit().await.map_err(db_err)?;

        Ok(id)
    }

    async fn find_point(&self, id: i64) -> spatial_core::Result<Option<Point>> {
        let row: Option<PointRow> = sqlx::query_as(
            r#"
            SELECT id, name, latitude, longitude FROM point_data WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(|r| r.into()))
    }

    async fn update_point(&self, point: &Point) -> spatial_core::Result<()> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let affected = sqlx::query(
            r#"
            UPDATE point_data SET name = ?1, latitude = ?2, longitude = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&point.name)
        .bind(point.latitude)
        .bind(point.longitude)
        .bind(point.id)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?
        .rows_affected();

        if affected == 0 {
            return Err(SpatialError::not_found(RecordKind::Point, point.id));
        }

        tx.commit().await.map_err(db_err)?;

        Ok(())
    }
}

#[async_trait]
impl PolygonStore for Database {
    async fn insert_polygon(&self, polygon: &NewPolygon) -> spatial_core::Result<i64> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let id = sqlx::query(
            r#"
            INSERT INTO polygon_data (name, coordinates)
            VALUES (?1, ?2)
            "#,
        )
        .bind(&polygon.name)
        .bind(&polygon.coordinates)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?
        .last_insert_rowid();

        tx.commit().await.map_err(db_err)?;

        Ok(id)
    }

    async fn find_polygon(&self, id: i64) -> spatial_core::Result<Option<Polygon>> {
        let row: Option<PolygonRow> = sqlx::query_as(
            r#"
            SELECT id, name, coordinates FROM polygon_data WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(|r| r.into()))
    }

    async fn update_polygon(&self, polygon: &Polygon) -> spatial_core::Result<()> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let affected = sqlx::query(
            r#"
            UPDATE polygon_data SET name = ?1, coordinates = ?2
            WHERE id = ?3
            "#,
        )
        .bind(&polygon.name)
        .bind(&polygon.coordinates)
        .bind(polygon.id)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?
        .rows_affected();

        if affected == 0 {
            return Err(SpatialError::not_found(RecordKind::Polygon, polygon.id));
        }

        tx.commit().await.map_err(db_err)?;

        Ok(())
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct PointRow {
    id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl From<PointRow> for Point {
    fn from(r: PointRow) -> Self {
        Point {
            id: r.id,
            name: r.name,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PolygonRow {
    id: i64,
    name: String,
    coordinates: String,
}

impl From<PolygonRow> for Polygon {
    fn from(r: PolygonRow) -> Self {
        Polygon {
            id: r.id,
            name: r.name,
            coordinates: r.coordinates,
        }
    }
}
