use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::CreateReviewRequest, responses::ReviewResponse};
use crate::domain::models::review::Review;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn attach_review(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::Validation("Rating must be between 1 and 5".into()));
    }
    if payload.comment.trim().is_empty() {
        return Err(AppError::Validation("Comment cannot be empty".into()));
    }

    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    // Booking must exist, but its status is not re-checked: a cancelled
    // attendee may still have attended historically.
    let booking = state.booking_repo.find_by_id(&payload.booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.event_id != event.id {
        return Err(AppError::Validation("Booking does not belong to this event".into()));
    }

    let review = Review::new(
        event.id.clone(),
        booking.id.clone(),
        payload.user_name,
        payload.rating,
        payload.comment,
    );

    let created = state.review_repo.create(&review).await?;
    info!("Review attached to event {} by booking {}", event.id, booking.id);

    Ok(Json(ReviewResponse::from(created)))
}
