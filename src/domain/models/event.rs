use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// An event as created by an administrator. `capacity` is the total seat
/// count and is immutable after creation; remaining seats are always
/// derived from the inventory ledger, never stored here.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: NaiveDate,
    pub deadline: NaiveDate,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub capacity: i32,
    pub fee: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub title: String,
    pub location: String,
    pub date: NaiveDate,
    pub deadline: NaiveDate,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub capacity: i32,
    pub fee: i32,
}

impl Event {
    pub fn new(params: NewEventParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            location: params.location,
            date: params.date,
            deadline: params.deadline,
            category: params.category,
            description: params.description,
            image_url: params.image_url,
            organizer_name: params.organizer_name,
            organizer_email: params.organizer_email,
            capacity: params.capacity,
            fee: params.fee,
            created_at: Utc::now(),
        }
    }
}
