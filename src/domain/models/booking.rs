use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_CANCELLED: &str = "CANCELLED";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub event_id: String,
    pub event_title: String,
    pub user_name: String,
    pub user_email: String,
    pub phone: String,
    pub tickets: i32,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    /// Client-supplied id for idempotent retries; a fresh v4 id is minted
    /// when absent.
    pub id: Option<String>,
    pub event_id: String,
    pub event_title: String,
    pub user_name: String,
    pub user_email: String,
    pub phone: String,
    pub tickets: i32,
    pub payment_method: String,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: params.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            event_id: params.event_id,
            event_title: params.event_title,
            user_name: params.user_name,
            user_email: params.user_email,
            phone: params.phone,
            tickets: params.tickets,
            payment_method: params.payment_method,
            status: STATUS_ACTIVE.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == STATUS_CANCELLED
    }
}
