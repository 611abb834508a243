use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, title, location, date, deadline, category, description,
                image_url, organizer_name, organizer_email, capacity, fee, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
            "SELECT * FROM events WHERE id = ?",
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
                 WHERE LOWER(title) LIKE '%' || LOWER(?) || '%'
                    OR LOWER(category) LIKE '%' || LOWER(?) || '%'
                 ORDER BY created_at ASC, id ASC",
            )
                .bind(term)
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
