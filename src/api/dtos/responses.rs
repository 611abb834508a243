use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::models::{booking::Booking, event::Event, review::Review};

#[derive(Serialize)]
pub struct OrganizerResponse {
    pub name: String,
    pub email: String,
}

/// Event as the browser client consumes it: the stored record plus live
/// `seats` (capacity minus net active reservations) and its reviews.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: NaiveDate,
    pub deadline: NaiveDate,
    pub category: String,
    pub description: String,
    pub image: String,
    pub organizer: OrganizerResponse,
    pub capacity: i32,
    pub fee: i32,
    pub seats: i64,
    pub reviews: Vec<ReviewResponse>,
    pub created_at: DateTime<Utc>,
}

impl EventResponse {
    pub fn from_parts(event: Event, seats: i64, reviews: Vec<Review>) -> Self {
        Self {
            id: event.id,
            title: event.title,
            location: event.location,
            date: event.date,
            deadline: event.deadline,
            category: event.category,
            description: event.description,
            image: event.image_url,
            organizer: OrganizerResponse {
                name: event.organizer_name,
                email: event.organizer_email,
            },
            capacity: event.capacity,
            fee: event.fee,
            seats,
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
            created_at: event.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            user_name: review.user_name,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
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

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            event_id: booking.event_id,
            event_title: booking.event_title,
            user_name: booking.user_name,
            user_email: booking.user_email,
            phone: booking.phone,
            tickets: booking.tickets,
            payment_method: booking.payment_method,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
