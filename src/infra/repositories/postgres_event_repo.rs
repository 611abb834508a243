use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, title, location, date, deadline, category, description,
                image_url, organizer_name, organizer_email, capacity, fee, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *"#
        )
            .bind(&event.id)
            .bind(&event.title)
            .bind(&event.location)
            .bind(event.date)
            .bind(event.deadline)
            .bind(&event.category)
            .bind(&event.description)
            .bind(&event.image_url)
            .bind(&event.organizer_name)
            .bind(&event.organizer_email)
            .bind(event.capacity)
            .bind(event.fee)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Event>, AppError> {
        match search {
            Some(term) => sqlx::query_as::<_, Event>(
                "SELECT * FROM events
                 WHERE title ILIKE '%' || $1 || '%' OR category ILIKE '%' || $1 || '%'
                 ORDER BY created_at ASC, id ASC",
            )
                .bind(term)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
            None => sqlx::query_as::<_, Event>(
                "SELECT * FROM events ORDER BY created_at ASC, id ASC",
            )
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
        }
    }
}
