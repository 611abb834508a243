use crate::domain::{models::{booking::Booking, ledger::LedgerEntry}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create_reserved(&self, booking: &Booking) -> Result<Booking, AppError> {
        // Retried request carrying an id we already stored: the reservation
        // is live, return the existing record instead of reserving twice.
        if let Some(existing) = self.find_by_id(&booking.id).await? {
            return Ok(existing);
        }

        let entry = LedgerEntry::reserve(booking);
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Guarded append, deliberately the first write statement of the
        // transaction: the availability subquery evaluates under the write
        // lock, so concurrent reservations on the same event serialize here.
        let result = sqlx::query(
            "INSERT INTO ledger_entries (id, booking_id, event_id, delta, created_at)
             SELECT ?, ?, e.id, ?, ?
             FROM events e
             WHERE e.id = ?
               AND e.capacity + COALESCE((SELECT SUM(l.delta) FROM ledger_entries l WHERE l.event_id = e.id), 0) >= ?"
        )
            .bind(&entry.id).bind(&entry.booking_id).bind(entry.delta).bind(entry.created_at)
            .bind(&booking.event_id).bind(booking.tickets)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict("Not enough seats available".to_string()));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, event_id, event_title, user_name, user_email, phone, tickets, payment_method, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_email = ? ORDER BY created_at DESC, id DESC").bind(email).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn cancel(&self, booking: &Booking) -> Result<Booking, AppError> {
        let entry = LedgerEntry::release(booking);
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Compensating append, guarded so the booking's deltas net to zero
        // exactly once even when two cancels race.
        sqlx::query(
            "INSERT INTO ledger_entries (id, booking_id, event_id, delta, created_at)
             SELECT ?, ?, ?, ?, ?
             WHERE NOT EXISTS (SELECT 1 FROM ledger_entries WHERE booking_id = ? AND delta > 0)"
        )
            .bind(&entry.id).bind(&entry.booking_id).bind(&entry.event_id).bind(entry.delta).bind(entry.created_at)
            .bind(&entry.booking_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let cancelled = sqlx::query_as::<_, Booking>("UPDATE bookings SET status = 'CANCELLED' WHERE id = ? RETURNING *")
            .bind(&booking.id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(cancelled)
    }
}
