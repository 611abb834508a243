use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateEventRequest, ListEventsQuery},
    responses::EventResponse,
};
use crate::domain::models::event::{Event, NewEventParams};
use crate::domain::models::review::Review;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.seats < 0 {
        return Err(AppError::Validation("Seat capacity cannot be negative".into()));
    }
    if payload.fee.is_some_and(|f| f < 0) {
        return Err(AppError::Validation("Fee cannot be negative".into()));
    }

    let event = Event::new(NewEventParams {
        title: payload.title,
        location: payload.location,
        date: payload.date,
        deadline: payload.deadline.unwrap_or(payload.date),
        category: payload.category,
        description: payload.description.unwrap_or_default(),
        image_url: payload.image,
        organizer_name: payload.organizer.name,
        organizer_email: payload.organizer.email,
        capacity: payload.seats,
        fee: payload.fee.unwrap_or(0),
    });

    let created = state.event_repo.create(&event).await?;
    info!("Event created: {} ({} seats)", created.id, created.capacity);

    // A fresh event has no ledger entries, so all seats are available.
    let seats = created.capacity as i64;
    Ok((StatusCode::CREATED, Json(EventResponse::from_parts(created, seats, Vec::new()))))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEventsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list(query.search.as_deref()).await?;

    let net: HashMap<String, i64> = state.ledger_repo.net_by_event().await?.into_iter().collect();

    let mut reviews_by_event: HashMap<String, Vec<Review>> = HashMap::new();
    for review in state.review_repo.list_all().await? {
        reviews_by_event.entry(review.event_id.clone()).or_default().push(review);
    }

    let items: Vec<EventResponse> = events
        .into_iter()
        .map(|event| {
            let seats = event.capacity as i64 + net.get(&event.id).copied().unwrap_or(0);
            let reviews = reviews_by_event.remove(&event.id).unwrap_or_default();
            EventResponse::from_parts(event, seats, reviews)
        })
        .collect();

    Ok(Json(items))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let seats = state.ledger_repo.availability(&event.id).await?;
    let reviews = state.review_repo.list_by_event(&event.id).await?;

    Ok(Json(EventResponse::from_parts(event, seats, reviews)))
}
