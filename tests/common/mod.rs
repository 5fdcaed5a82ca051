#![allow(dead_code)]

use axum::Router;
use chrono::Utc;
use shortcode::application::services::CodeAllocator;
use shortcode::domain::entities::{NewUrlMapping, UrlMapping};
use shortcode::domain::repositories::UrlMappingRepository;
use shortcode::infrastructure::persistence::SqliteUrlMappingRepository;
use shortcode::routes::{AssetDirs, app_router};
use shortcode::state::AppState;
use shortcode::utils::code_generator::SequentialGenerator;
use std::sync::Arc;
use tempfile::TempDir;

/// A throwaway SQLite database. The file lives as long as this value.
pub struct TestDb {
    pub dir: TempDir,
    pub repo: Arc<SqliteUrlMappingRepository>,
}

impl TestDb {
    pub fn path(&self) -> String {
        self.dir
            .path()
            .join("database.db")
            .to_string_lossy()
            .into_owned()
    }
}

/// Opens a fresh database with the schema in place.
pub async fn create_test_db() -> TestDb {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("database.db");

    let repo = SqliteUrlMappingRepository::connect(path.to_str().unwrap(), 5)
        .await
        .unwrap();
    repo.init().await.unwrap();

    TestDb {
        dir,
        repo: Arc::new(repo),
    }
}

/// Sequential allocator with the production seeds.
pub fn sequential_allocator(max_attempts: usize) -> CodeAllocator {
    CodeAllocator::new(
        Arc::new(SequentialGenerator::new(100_000, 50_000)),
        max_attempts,
    )
}

pub fn create_test_state(db: &TestDb, base_url: Option<&str>) -> AppState {
    create_test_state_with(db, sequential_allocator(10), base_url)
}

pub fn create_test_state_with(
    db: &TestDb,
    allocator: CodeAllocator,
    base_url: Option<&str>,
) -> AppState {
    AppState::new(db.repo.clone(), allocator, base_url.map(str::to_string))
}

/// Full application router over `state`.
pub fn create_test_app(state: AppState) -> Router {
    app_router(state, &AssetDirs::default())
}

pub async fn create_test_mapping(db: &TestDb, code: &str, url: &str) -> UrlMapping {
    db.repo
        .insert(NewUrlMapping {
            short_code: code.to_string(),
            long_url: url.to_string(),
            created_at: Utc::now(),
        })
        .await
        .unwrap()
}
