use eventech_backend::{
    api::router::create_router,
    config::Config,
    domain::services::booking_service::BookingService,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_event_repo::SqliteEventRepo,
        sqlite_ledger_repo::SqliteLedgerRepo,
        sqlite_review_repo::SqliteReviewRepo,
    },
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use axum::Router;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        // WAL + busy timeout match the production bootstrap; the
        // concurrency tests depend on contended writers waiting instead
        // of failing immediately.
        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let event_repo = Arc::new(SqliteEventRepo::new(pool.clone()));
        let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let booking_service = Arc::new(BookingService::new(event_repo.clone(), booking_repo.clone()));

        let state = Arc::new(AppState {
            config,
            event_repo,
            booking_repo,
            ledger_repo: Arc::new(SqliteLedgerRepo::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
            booking_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
