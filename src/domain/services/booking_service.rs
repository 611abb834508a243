use std::sync::Arc;

use tracing::info;

use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::ports::{BookingRepository, EventRepository};
use crate::error::AppError;

/// The booking state machine: Requested -> ACTIVE -> CANCELLED, where
/// Requested only exists inside `place_booking`'s atomic unit and is never
/// observable from outside.
pub struct BookingService {
    event_repo: Arc<dyn EventRepository>,
    booking_repo: Arc<dyn BookingRepository>,
}

pub struct PlaceBookingParams {
    /// Client-supplied id for idempotent retries after a transient failure.
    pub booking_id: Option<String>,
    pub event_id: String,
    pub user_name: String,
    pub user_email: String,
    pub phone: String,
    pub tickets: i32,
    pub payment_method: String,
}

impl BookingService {
    pub fn new(event_repo: Arc<dyn EventRepository>, booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self { event_repo, booking_repo }
    }

    pub async fn place_booking(&self, params: PlaceBookingParams) -> Result<Booking, AppError> {
        if params.tickets < 1 {
            return Err(AppError::Validation("Ticket count must be at least 1".into()));
        }

        let event = self.event_repo.find_by_id(&params.event_id).await?
            .ok_or(AppError::NotFound("Event not found".into()))?;

        let booking = Booking::new(NewBookingParams {
            id: params.booking_id,
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            user_name: params.user_name,
            user_email: params.user_email,
            phone: params.phone,
            tickets: params.tickets,
            payment_method: params.payment_method,
        });

        // The availability check and both writes happen inside the repo's
        // transaction; a losing racer surfaces here as Conflict.
        let created = match self.booking_repo.create_reserved(&booking).await {
            Ok(b) => b,
            Err(AppError::Conflict(_)) => {
                return Err(AppError::SoldOut("Not enough seats left for this event".into()));
            }
            Err(e) => return Err(map_storage_timeout(e)),
        };

        info!("Booking {} reserved {} seat(s) for event {}", created.id, created.tickets, created.event_id);
        Ok(created)
    }

    /// Idempotent: cancelling an already-cancelled booking returns it
    /// unchanged, so availability is restored exactly once.
    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Booking, AppError> {
        let booking = self.booking_repo.find_by_id(booking_id).await?
            .ok_or(AppError::NotFound("Booking not found".into()))?;

        if booking.is_cancelled() {
            return Ok(booking);
        }

        let cancelled = self.booking_repo.cancel(&booking).await.map_err(map_storage_timeout)?;
        info!("Booking cancelled: {}", cancelled.id);
        Ok(cancelled)
    }
}

// Pool exhaustion rolls the whole transaction back, so the caller may
// resubmit the identical request (same booking id) without double effect.
fn map_storage_timeout(err: AppError) -> AppError {
    match err {
        AppError::Database(sqlx::Error::PoolTimedOut) => {
            AppError::Transient("Storage timed out, the operation was not applied".into())
        }
        other => other,
    }
}
