use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct OrganizerInfo {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    /// Registration deadline; the admin client defaults it to the event date.
    pub deadline: Option<NaiveDate>,
    pub location: String,
    pub category: String,
    pub description: Option<String>,
    pub seats: i32,
    pub image: String,
    pub fee: Option<i32>,
    pub organizer: OrganizerInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Optional client-chosen id; resubmitting after a 503 with the same id
    /// never reserves twice.
    pub booking_id: Option<String>,
    pub event_id: String,
    pub user_name: String,
    pub user_email: String,
    pub phone: String,
    pub tickets: i32,
    pub payment_method: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub booking_id: String,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Deserialize)]
pub struct ListEventsQuery {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct ListBookingsQuery {
    pub email: String,
}
