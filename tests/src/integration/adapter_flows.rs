//! # Adapter Flows
//!
//! Put/Get through [`SunriseStore`] and [`StoreBackend`] against a live mock
//! publishing service.

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::Duration;

    use rand::RngCore;
    use sunrise_alt_da::{
        BackendSettings, DaStore, SelectorError, StoreBackend, StoreError, SunriseSettings,
        SunriseStore, SUNRISE_VERSION_BYTE,
    };
    use tracing::Span;

    use crate::mock::{unreachable_endpoint, MockSunrise};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn random_blob(len: usize) -> Vec<u8> {
        let mut data = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut data);
        data
    }

    fn store_for(endpoint: &str) -> SunriseStore {
        let config = SunriseSettings::new(endpoint, "ab12").build().unwrap();
        SunriseStore::new(config, Span::none())
    }

    // =============================================================================
    // ROUND TRIPS
    // =============================================================================

    #[tokio::test]
    async fn test_random_blob_round_trip() {
        let mock = MockSunrise::spawn().await;
        let store = store_for(&mock.endpoint());

        let data = random_blob(2000);
        let commitment = store.put(&data).await.unwrap();
        assert_eq!(commitment.as_bytes()[0], SUNRISE_VERSION_BYTE);

        let locator = store.codec().decode(commitment.as_bytes()).unwrap();
        assert!(!locator.is_empty());

        let fetched = store.get(locator).await.unwrap();
        assert_eq!(fetched, data);
        assert_eq!(mock.state.publish_count(), 1);
    }

    #[tokio::test]
    async fn test_shard_counts_reach_service() {
        let mock = MockSunrise::spawn().await;
        let mut settings = SunriseSettings::new(mock.endpoint(), "ab12");
        settings.data_shard_count = 6;
        settings.parity_shard_count = 3;
        let store = SunriseStore::new(settings.build().unwrap(), Span::none());

        store.put(b"payload").await.unwrap();

        let requests = mock.state.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].data_shard_count, 6);
        assert_eq!(requests[0].parity_shard_count, 3);
        assert_eq!(requests[0].protocol, "ipfs");
    }

    #[tokio::test]
    async fn test_concurrent_puts_are_independent() {
        let mock = MockSunrise::spawn().await;
        let store = Arc::new(store_for(&mock.endpoint()));

        let mut handles = Vec::new();
        for i in 0..16u8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let data = vec![i; 64 + i as usize];
                let commitment = store.put(&data).await.unwrap();
                (data, commitment)
            }));
        }

        for handle in handles {
            let (data, commitment) = handle.await.unwrap();
            let locator = store.codec().decode(commitment.as_bytes()).unwrap();
            assert_eq!(store.get(locator).await.unwrap(), data);
        }
        assert_eq!(mock.state.stored(), 16);
    }

    // =============================================================================
    // FAILURES
    // =============================================================================

    #[tokio::test]
    async fn test_put_unreachable_endpoint() {
        let store = store_for(&unreachable_endpoint().await);
        let result = store.put(&random_blob(2000)).await;
        assert!(matches!(result, Err(StoreError::PutFailed { .. })));
    }

    #[tokio::test]
    async fn test_put_rejected_by_service() {
        let mock = MockSunrise::spawn().await;
        mock.state.fail_publish.store(true, Ordering::SeqCst);

        let store = store_for(&mock.endpoint());
        let result = store.put(b"data").await;
        assert!(matches!(result, Err(StoreError::PutFailed { .. })));
        assert_eq!(mock.state.stored(), 0);
    }

    #[tokio::test]
    async fn test_get_unknown_locator_not_found() {
        let mock = MockSunrise::spawn().await;
        let store = store_for(&mock.endpoint());

        let err = store.get(b"ipfs://never-published").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_deadline_applies() {
        let mock = MockSunrise::spawn().await;
        let store = store_for(&mock.endpoint()).with_get_timeout(Duration::from_millis(200));

        let commitment = store.put(b"slow blob").await.unwrap();
        *mock.state.get_delay.lock() = Some(Duration::from_secs(5));

        let locator = store.codec().decode(commitment.as_bytes()).unwrap();
        let result = store.get(locator).await;
        assert!(matches!(result, Err(StoreError::GetFailed { .. })));
    }

    #[tokio::test]
    async fn test_abandoned_put_returns_promptly_without_retry() {
        let mock = MockSunrise::spawn().await;
        *mock.state.publish_delay.lock() = Some(Duration::from_secs(5));
        let store = store_for(&mock.endpoint());

        // The request is in flight when the caller gives up and drops it.
        let started = std::time::Instant::now();
        let result = tokio::time::timeout(Duration::from_millis(200), store.put(b"cancelled")).await;
        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(mock.state.publish_received(), 1);
        assert_eq!(mock.state.publish_count(), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(mock.state.publish_received(), 1);
    }

    // =============================================================================
    // BACKEND SELECTION
    // =============================================================================

    #[tokio::test]
    async fn test_selected_backend_round_trip() {
        let mock = MockSunrise::spawn().await;
        let settings = BackendSettings {
            sunrise: SunriseSettings::new(mock.endpoint(), "00ff"),
        };
        let backend = StoreBackend::select(&settings, &Span::none()).unwrap();
        assert_eq!(backend.name(), "sunrise");

        let data = random_blob(512);
        let commitment = backend.put(&data).await.unwrap();
        let locator = backend.codec().decode(commitment.as_bytes()).unwrap();
        assert_eq!(backend.get(locator).await.unwrap(), data);
    }

    #[test]
    fn test_selection_without_backend_fails() {
        let result = StoreBackend::select(&BackendSettings::default(), &Span::none());
        assert!(matches!(result, Err(SelectorError::NoBackendConfigured)));
    }
}
