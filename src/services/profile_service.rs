//! Query facade over the profile provider chain.

use std::sync::Arc;

use crate::domain::errors::FetchResult;
use crate::domain::models::{UserId, UserProfile};
use crate::domain::ports::ProfileProvider;

/// Stateless facade consumed by both the CLI and the HTTP router.
///
/// Owns no state of its own; delegates every lookup to the provider chain
/// assembled by the composition root (upstream provider, optionally wrapped
/// in the caching adapter).
#[derive(Clone)]
pub struct ProfileService {
    provider: Arc<dyn ProfileProvider>,
}

impl ProfileService {
    /// Create a facade over an assembled provider chain.
    #[must_use]
    pub fn new(provider: Arc<dyn ProfileProvider>) -> Self {
        Self { provider }
    }

    /// Resolve the profile for `id`.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`FetchError`](crate::FetchError) unchanged.
    pub async fn get_by_id(&self, id: UserId) -> FetchResult<UserProfile> {
        self.provider.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::errors::FetchError;
    use crate::domain::models::UserRecord;

    struct StubProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProfileProvider for StubProvider {
        async fn get_by_id(&self, id: UserId) -> FetchResult<UserProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if id == 404 {
                return Err(FetchError::NotFound);
            }
            Ok(UserProfile::assemble(
                UserRecord {
                    name: "Leanne Graham".to_string(),
                    username: "Bret".to_string(),
                    email: "Sincere@april.biz".to_string(),
                },
                vec![],
            ))
        }
    }

    #[tokio::test]
    async fn facade_delegates_to_provider() {
        let provider = Arc::new(StubProvider {
            calls: AtomicUsize::new(0),
        });
        let service = ProfileService::new(provider.clone());

        let profile = service.get_by_id(1).await.unwrap();
        assert_eq!(profile.username, "Bret");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn facade_passes_errors_through() {
        let service = ProfileService::new(Arc::new(StubProvider {
            calls: AtomicUsize::new(0),
        }));

        assert!(matches!(
            service.get_by_id(404).await,
            Err(FetchError::NotFound)
        ));
    }
}
