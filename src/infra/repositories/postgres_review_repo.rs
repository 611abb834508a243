use crate::domain::{models::review::Review, ports::ReviewRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresReviewRepo {
    pool: PgPool,
}

impl PostgresReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, event_id, booking_id, user_name, rating, comment, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&review.id).bind(&review.event_id).bind(&review.booking_id).bind(&review.user_name)
            .bind(review.rating).bind(&review.comment).bind(review.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE event_id = $1 ORDER BY created_at ASC, id ASC")
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
