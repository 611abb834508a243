use crate::domain::ports::LedgerRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteLedgerRepo {
    pool: SqlitePool,
}

impl SqliteLedgerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerRepository for SqliteLedgerRepo {
    async fn availability(&self, event_id: &str) -> Result<i64, AppError> {
        let remaining = sqlx::query_scalar::<_, i64>(
            "SELECT e.capacity + COALESCE((SELECT SUM(l.delta) FROM ledger_entries l WHERE l.event_id = e.id), 0)
             FROM events e WHERE e.id = ?"
        )
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        remaining.ok_or(AppError::NotFound("Event not found".into()))
    }

    async fn net_by_event(&self) -> Result<Vec<(String, i64)>, AppError> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT event_id, SUM(delta) FROM ledger_entries GROUP BY event_id"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
