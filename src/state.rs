use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, EventRepository, LedgerRepository, ReviewRepository,
};
use crate::domain::services::booking_service::BookingService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub ledger_repo: Arc<dyn LedgerRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub booking_service: Arc<BookingService>,
}
