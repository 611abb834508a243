pub mod sqlite_booking_repo;
pub mod sqlite_event_repo;
pub mod sqlite_ledger_repo;
pub mod sqlite_review_repo;

pub mod postgres_booking_repo;
pub mod postgres_event_repo;
pub mod postgres_ledger_repo;
pub mod postgres_review_repo;
