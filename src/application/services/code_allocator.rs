//! Short code allocation with store-backed collision handling.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, SequentialGenerator, is_reserved};

/// Default retry bound.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Allocates a free short code and commits the mapping in one step.
///
/// # Attempt Loop
///
/// ```text
/// Generating -> Checking -> Inserted
///                        -> Collided -> Generating ... -> Exhausted
/// ```
///
/// 1. Take the next candidate from the generator (this advances it, whatever
///    the outcome of the attempt)
/// 2. Ask the store whether the code exists; skip if it does
/// 3. Insert; a [`AppError::DuplicateCode`] from the store sends the loop
///    back to step 1
///
/// The existence check only lowers the collision rate. The unique constraint
/// behind [`UrlMappingRepository::insert`] decides, which also covers a
/// restarted counter replaying codes from a previous run.
pub struct CodeAllocator {
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl CodeAllocator {
    pub fn new(generator: Arc<dyn CodeGenerator>, max_attempts: usize) -> Self {
        Self {
            generator,
            max_attempts,
        }
    }

    /// Finds a free code for `long_url` and inserts the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationExhausted`] if every attempt collided.
    /// Returns [`AppError::StorageUnavailable`] if an insert fails for any
    /// reason other than a duplicate code. Nothing is persisted in either case.
    pub async fn allocate<R>(
        &self,
        repository: &R,
        long_url: &str,
        created_at: DateTime<Utc>,
    ) -> Result<UrlMapping, AppError>
    where
        R: UrlMappingRepository + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.next_candidate();

            if is_reserved(&candidate) {
                debug!(code = %candidate, attempt, "Skipping reserved code");
                continue;
            }

            match repository.exists(&candidate).await {
                Ok(true) => {
                    debug!(code = %candidate, attempt, "Candidate already in use");
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(code = %candidate, attempt, error = %e, "Existence check failed, trying insert");
                }
            }

            let new_mapping = NewUrlMapping {
                short_code: candidate,
                long_url: long_url.to_string(),
                created_at,
            };

            match repository.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::DuplicateCode { code }) => {
                    debug!(%code, attempt, "Insert collided on unique constraint");
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            attempts = self.max_attempts,
            "Exhausted short code allocation attempts"
        );

        Err(AppError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for CodeAllocator {
    fn default() -> Self {
        Self::new(Arc::new(SequentialGenerator::default()), DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlMappingRepository;
    use crate::utils::base62;
    use std::sync::Mutex;

    fn sequential(max_attempts: usize) -> CodeAllocator {
        CodeAllocator::new(
            Arc::new(SequentialGenerator::new(100_000, 50_000)),
            max_attempts,
        )
    }

    struct FixedGenerator(Mutex<Vec<&'static str>>);

    impl CodeGenerator for FixedGenerator {
        fn next_candidate(&self) -> String {
            self.0.lock().unwrap().remove(0).to_string()
        }
    }

    #[tokio::test]
    async fn test_allocate_first_candidate() {
        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists()
            .withf(|code| code == "q0U")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|m| m.short_code == "q0U" && m.long_url == "https://example.com")
            .times(1)
            .returning(|m| Ok(m.with_id(1)));

        let mapping = sequential(10)
            .allocate(&repo, "https://example.com", Utc::now())
            .await
            .unwrap();

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.short_code, "q0U");
    }

    #[tokio::test]
    async fn test_allocate_skips_existing_code() {
        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists()
            .returning(|code| Ok(code == "q0U"));
        repo.expect_insert()
            .withf(|m| m.short_code == "D1m")
            .times(1)
            .returning(|m| Ok(m.with_id(2)));

        let mapping = sequential(10)
            .allocate(&repo, "https://example.com", Utc::now())
            .await
            .unwrap();

        assert_eq!(mapping.short_code, "D1m");
    }

    #[tokio::test]
    async fn test_allocate_retries_on_duplicate_code() {
        // The advisory check misses a concurrent writer; the constraint catches it.
        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists().times(2).returning(|_| Ok(false));

        let mut calls = 0;
        repo.expect_insert().times(2).returning(move |m| {
            calls += 1;
            if calls == 1 {
                Err(AppError::DuplicateCode {
                    code: m.short_code,
                })
            } else {
                Ok(m.with_id(7))
            }
        });

        let mapping = sequential(10)
            .allocate(&repo, "https://example.com", Utc::now())
            .await
            .unwrap();

        assert_eq!(mapping.short_code, base62::encode(150_000));
    }

    #[tokio::test]
    async fn test_allocate_exhausted_after_bound() {
        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists().times(3).returning(|_| Ok(false));
        repo.expect_insert().times(3).returning(|m| {
            Err(AppError::DuplicateCode {
                code: m.short_code,
            })
        });

        let result = sequential(3)
            .allocate(&repo, "https://example.com", Utc::now())
            .await;

        assert!(matches!(
            result,
            Err(AppError::AllocationExhausted { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn test_allocate_exhausted_when_all_exist() {
        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists().times(10).returning(|_| Ok(true));
        repo.expect_insert().times(0);

        let result = sequential(10)
            .allocate(&repo, "https://example.com", Utc::now())
            .await;

        assert!(matches!(
            result,
            Err(AppError::AllocationExhausted { attempts: 10 })
        ));
    }

    #[tokio::test]
    async fn test_allocate_inserts_when_existence_check_fails() {
        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists()
            .times(1)
            .returning(|_| Err(AppError::storage("database is locked")));
        repo.expect_insert()
            .times(1)
            .returning(|m| Ok(m.with_id(3)));

        let mapping = sequential(10)
            .allocate(&repo, "https://example.com", Utc::now())
            .await
            .unwrap();

        assert_eq!(mapping.short_code, "q0U");
    }

    #[tokio::test]
    async fn test_allocate_propagates_storage_failure() {
        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists().times(1).returning(|_| Ok(false));
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::storage("disk I/O error")));

        let result = sequential(10)
            .allocate(&repo, "https://example.com", Utc::now())
            .await;

        assert!(matches!(result, Err(AppError::StorageUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_allocate_skips_reserved_codes() {
        let generator = FixedGenerator(Mutex::new(vec!["health", "abc1234"]));
        let allocator = CodeAllocator::new(Arc::new(generator), 10);

        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists()
            .withf(|code| code == "abc1234")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|m| m.short_code == "abc1234")
            .times(1)
            .returning(|m| Ok(m.with_id(1)));

        let mapping = allocator
            .allocate(&repo, "https://example.com", Utc::now())
            .await
            .unwrap();

        assert_eq!(mapping.short_code, "abc1234");
    }

    #[tokio::test]
    async fn test_counter_advances_on_every_attempt() {
        let generator = Arc::new(SequentialGenerator::new(100_000, 50_000));
        let allocator = CodeAllocator::new(generator.clone(), 4);

        let mut repo = MockUrlMappingRepository::new();
        repo.expect_exists().returning(|_| Ok(true));

        let _ = allocator
            .allocate(&repo, "https://example.com", Utc::now())
            .await;

        assert_eq!(generator.peek_seed(), 100_000 + 4 * 50_000);
    }
}
