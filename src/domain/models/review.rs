use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Review {
    pub id: String,
    pub event_id: String,
    pub booking_id: String,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(event_id: String, booking_id: String, user_name: String, rating: i32, comment: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            booking_id,
            user_name,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}
