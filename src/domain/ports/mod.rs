use crate::domain::models::{
    booking::Booking, event::Event, review::Review,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    /// Full pass over the catalog in creation order. `search` filters by
    /// case-insensitive substring on title or category.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Event>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomic reserve: append the booking's reservation delta to the
    /// ledger and insert the booking row in one transaction. Fails with
    /// `Conflict` when the event lacks availability, leaving no trace of
    /// either write. Re-invoking with an already-stored booking id is a
    /// no-op returning the existing record.
    async fn create_reserved(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError>;
    /// Atomic cancel: append the compensating release delta (at most once
    /// per booking) and flip the status, in one transaction.
    async fn cancel(&self, booking: &Booking) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Seats remaining for an event: capacity plus the net of its ledger
    /// deltas, read from a single consistent snapshot.
    async fn availability(&self, event_id: &str) -> Result<i64, AppError>;
    /// Net ledger delta per event, for decorating event listings without
    /// one query per row.
    async fn net_by_event(&self) -> Result<Vec<(String, i64)>, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Review>, AppError>;
    async fn list_all(&self) -> Result<Vec<Review>, AppError>;
}
