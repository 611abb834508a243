use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateBookingRequest, ListBookingsQuery},
    responses::BookingResponse,
};
use crate::domain::services::booking_service::PlaceBookingParams;
use crate::error::AppError;
use std::sync::Arc;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_service.place_booking(PlaceBookingParams {
        booking_id: payload.booking_id,
        event_id: payload.event_id,
        user_name: payload.user_name,
        user_email: payload.user_email,
        phone: payload.phone,
        tickets: payload.tickets,
        payment_method: payload.payment_method.unwrap_or_default(),
    }).await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_by_email(&query.email).await?;
    let items: Vec<BookingResponse> = bookings.into_iter().map(BookingResponse::from).collect();
    Ok(Json(items))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cancelled = state.booking_service.cancel_booking(&id).await?;
    Ok(Json(BookingResponse::from(cancelled)))
}
