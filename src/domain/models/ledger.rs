use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::booking::Booking;

/// Write-once seat adjustment tied to a booking. Negative deltas reserve
/// seats, positive deltas release them. For any booking the entries must
/// net to 0 or -tickets, never a partial amount.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct LedgerEntry {
    pub id: String,
    pub booking_id: String,
    pub event_id: String,
    pub delta: i32,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn reserve(booking: &Booking) -> Self {
        Self::with_delta(booking, -booking.tickets)
    }

    pub fn release(booking: &Booking) -> Self {
        Self::with_delta(booking, booking.tickets)
    }

    fn with_delta(booking: &Booking, delta: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            booking_id: booking.id.clone(),
            event_id: booking.event_id.clone(),
            delta,
            created_at: Utc::now(),
        }
    }
}
