mod common;

use shortcode::application::services::ShortenService;
use shortcode::domain::repositories::UrlMappingRepository;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shortens_get_distinct_codes() {
    let db = common::create_test_db().await;
    let service = Arc::new(ShortenService::new(
        db.repo.clone(),
        common::sequential_allocator(10),
    ));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .shorten(&format!("https://example.com/{}", i), "sho.rt")
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        let link = handle.await.unwrap().unwrap();
        assert!(codes.insert(link.code), "code issued twice");
    }

    assert_eq!(codes.len(), 32);
    assert_eq!(db.repo.count().await.unwrap(), 32);

    for code in &codes {
        assert!(db.repo.lookup(code).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn test_fresh_process_issues_deterministic_codes() {
    let db = common::create_test_db().await;
    let service = ShortenService::new(db.repo.clone(), common::sequential_allocator(10));

    let first = service.shorten("https://example.com/a", "sho.rt").await.unwrap();
    let second = service.shorten("https://example.com/b", "sho.rt").await.unwrap();

    assert_eq!(first.code, "q0U");
    assert_eq!(second.code, "D1m");
    assert_eq!(second.short_url, "sho.rt/D1m");
}

#[tokio::test]
async fn test_two_services_sharing_a_database() {
    // Two processes with their own counters replay the same candidates.
    let db = common::create_test_db().await;
    let first = ShortenService::new(db.repo.clone(), common::sequential_allocator(10));
    let second = ShortenService::new(db.repo.clone(), common::sequential_allocator(10));

    let a = first.shorten("https://example.com/a", "sho.rt").await.unwrap();
    let b = second.shorten("https://example.com/b", "sho.rt").await.unwrap();

    assert_eq!(a.code, "q0U");
    assert_eq!(b.code, "D1m");
    assert_eq!(
        db.repo.lookup("q0U").await.unwrap().as_deref(),
        Some("https://example.com/a")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_two_services_shorten_concurrently_on_one_database() {
    // Both counters replay the same candidates. The loser of each race is
    // turned away by the existence check or the UNIQUE constraint.
    let db = common::create_test_db().await;
    let services = [
        Arc::new(ShortenService::new(
            db.repo.clone(),
            common::sequential_allocator(10),
        )),
        Arc::new(ShortenService::new(
            db.repo.clone(),
            common::sequential_allocator(10),
        )),
    ];

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let service = Arc::clone(&services[i % 2]);
            tokio::spawn(async move {
                service
                    .shorten(&format!("https://example.com/{}", i), "sho.rt")
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        let link = handle.await.unwrap().unwrap();
        assert!(codes.insert(link.code.clone()), "code issued twice");
        assert_eq!(
            db.repo.lookup(&link.code).await.unwrap().as_deref(),
            Some(link.original_url.as_str())
        );
    }

    assert_eq!(codes.len(), 64);
    assert_eq!(db.repo.count().await.unwrap(), 64);
}
