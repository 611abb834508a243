use crate::domain::{models::{booking::Booking, ledger::LedgerEntry}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_reserved(&self, booking: &Booking) -> Result<Booking, AppError> {
        if let Some(existing) = self.find_by_id(&booking.id).await? {
            return Ok(existing);
        }

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Row lock on the event scopes the check-then-append to this event
        // id; reservations on other events proceed in parallel.
        let capacity = sqlx::query_scalar::<_, i32>("SELECT capacity FROM events WHERE id = $1 FOR UPDATE")
            .bind(&booking.event_id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Event not found".into()))?;

        let net: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(delta), 0) FROM ledger_entries WHERE event_id = $1")
            .bind(&booking.event_id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        if capacity as i64 + net < booking.tickets as i64 {
            return Err(AppError::Conflict("Not enough seats available".to_string()));
        }

        let entry = LedgerEntry::reserve(booking);
        sqlx::query("INSERT INTO ledger_entries (id, booking_id, event_id, delta, created_at) VALUES ($1, $2, $3, $4, $5)")
            .bind(&entry.id).bind(&entry.booking_id).bind(&entry.event_id).bind(entry.delta).bind(entry.created_at)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, event_id, event_title, user_name, user_email, phone, tickets, payment_method, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.event_id).bind(&booking.event_title).bind(&booking.user_name)
            .bind(&booking.user_email).bind(&booking.phone).bind(booking.tickets).bind(&booking.payment_method)
            .bind(&booking.status).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_email = $1 ORDER BY created_at DESC, id DESC").bind(email).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn cancel(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Same per-event lock as the reserve path, so a release is never
        // interleaved with a concurrent availability check.
        sqlx::query("SELECT id FROM events WHERE id = $1 FOR UPDATE")
            .bind(&booking.event_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let entry = LedgerEntry::release(booking);
        sqlx::query(
            "INSERT INTO ledger_entries (id, booking_id, event_id, delta, created_at)
             SELECT $1, $2, $3, $4, $5
             WHERE NOT EXISTS (SELECT 1 FROM ledger_entries WHERE booking_id = $2 AND delta > 0)"
        )
            .bind(&entry.id).bind(&entry.booking_id).bind(&entry.event_id).bind(entry.delta).bind(entry.created_at)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let cancelled = sqlx::query_as::<_, Booking>("UPDATE bookings SET status = 'CANCELLED' WHERE id = $1 RETURNING *")
            .bind(&booking.id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(cancelled)
    }
}
