//! Effect handler: turns [`Effect::FetchWeather`] into a running task
//!
//! The intent action has already put the store into `Loading` by the time an
//! effect arrives here. The spawned task calls the API once and reports back
//! with a result action carrying the same request id.

use std::sync::Arc;

use crate::action::Action;
use crate::client::WeatherApi;
use crate::effect::Effect;
use crate::state::RequestId;
use crate::tasks::TaskManager;

/// Task key for weather fetches; a newer fetch replaces an older one
pub const WEATHER_TASK: &str = "weather";

pub struct WeatherFetcher {
    api: Arc<dyn WeatherApi>,
    api_key: String,
}

impl WeatherFetcher {
    pub fn new(api: Arc<dyn WeatherApi>, api_key: impl Into<String>) -> Self {
        Self {
            api,
            api_key: api_key.into(),
        }
    }

    /// Handle one effect by spawning on `tasks`
    pub fn handle(&self, effect: Effect, tasks: &mut TaskManager) {
        match effect {
            Effect::FetchWeather { request, city } => {
                let api = Arc::clone(&self.api);
                let api_key = self.api_key.clone();
                tasks.spawn(WEATHER_TASK, async move {
                    run_fetch(api.as_ref(), &api_key, request, &city).await
                });
            }
        }
    }
}

/// Call the API and wrap the outcome in a result action
pub async fn run_fetch(
    api: &dyn WeatherApi,
    api_key: &str,
    request: RequestId,
    city: &str,
) -> Action {
    match api.fetch_current_weather(api_key, city).await {
        Ok(snapshot) => Action::WeatherDidLoad { request, snapshot },
        Err(error) => Action::WeatherDidError { request, error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{mpsc, oneshot};
    use tokio_util::sync::CancellationToken;

    use crate::error::TransportError;
    use crate::fixtures::london;
    use crate::model::WeatherSnapshot;
    use crate::state::{AppState, FetchState, FETCH_ERROR_MESSAGE};
    use crate::store::WeatherStore;

    /// Replies with whatever the test pushes through `release`
    struct GatedApi {
        calls: Mutex<Vec<(String, String)>>,
        release: tokio::sync::Mutex<Option<oneshot::Receiver<Result<WeatherSnapshot, TransportError>>>>,
    }

    impl GatedApi {
        fn new() -> (Arc<Self>, oneshot::Sender<Result<WeatherSnapshot, TransportError>>) {
            let (tx, rx) = oneshot::channel();
            let api = Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                release: tokio::sync::Mutex::new(Some(rx)),
            });
            (api, tx)
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherApi for GatedApi {
        async fn fetch_current_weather(
            &self,
            api_key: &str,
            city: &str,
        ) -> Result<WeatherSnapshot, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((api_key.to_string(), city.to_string()));
            let rx = self.release.lock().await.take();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".into()))),
                None => Err(TransportError::Network("already used".into())),
            }
        }
    }

    struct FixedApi(Result<WeatherSnapshot, TransportError>);

    #[async_trait]
    impl WeatherApi for FixedApi {
        async fn fetch_current_weather(
            &self,
            _api_key: &str,
            _city: &str,
        ) -> Result<WeatherSnapshot, TransportError> {
            self.0.clone()
        }
    }

    async fn next_action(rx: &mut mpsc::UnboundedReceiver<Action>) -> Action {
        tokio::time::timeout(Duration::from_millis(500), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_run_fetch_maps_outcomes() {
        let ok = FixedApi(Ok(london()));
        assert_eq!(
            run_fetch(&ok, "k", RequestId(3), "London").await,
            Action::WeatherDidLoad {
                request: RequestId(3),
                snapshot: london(),
            }
        );

        let failing = FixedApi(Err(TransportError::Status { status: 500 }));
        assert_eq!(
            run_fetch(&failing, "k", RequestId(4), "London").await,
            Action::WeatherDidError {
                request: RequestId(4),
                error: TransportError::Status { status: 500 },
            }
        );
    }

    #[tokio::test]
    async fn test_loading_is_observable_before_io_completes() {
        let (api, release) = GatedApi::new();
        let fetcher = WeatherFetcher::new(api.clone(), "secret");
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx, CancellationToken::new());
        let mut store = WeatherStore::new(AppState::default());
        let observer = store.observe();

        let result = store.fetch("London");
        assert_eq!(*observer.borrow(), FetchState::Loading);
        assert!(api.calls().is_empty());

        for effect in result.effects {
            fetcher.handle(effect, &mut tasks);
        }

        release.send(Ok(london())).unwrap();
        let action = next_action(&mut rx).await;
        store.dispatch(action);

        assert_eq!(
            api.calls(),
            vec![("secret".to_string(), "London".to_string())]
        );
        assert_eq!(*observer.borrow(), FetchState::Success(london()));
    }

    #[tokio::test]
    async fn test_failures_reach_store_as_fixed_message() {
        let failures = [
            TransportError::Status { status: 404 },
            TransportError::Network("dns error".into()),
            TransportError::Decode("trailing characters".into()),
        ];

        for error in failures {
            let fetcher = WeatherFetcher::new(Arc::new(FixedApi(Err(error))), "k");
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut tasks = TaskManager::new(tx, CancellationToken::new());
            let mut store = WeatherStore::new(AppState::default());

            for effect in store.fetch("Atlantis").effects {
                fetcher.handle(effect, &mut tasks);
            }
            let action = next_action(&mut rx).await;
            store.dispatch(action);

            assert_eq!(
                *store.fetch_state(),
                FetchState::Error(FETCH_ERROR_MESSAGE.to_string())
            );
        }
    }

    #[tokio::test]
    async fn test_newer_fetch_replaces_older_task() {
        let (slow, _release) = GatedApi::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx, CancellationToken::new());
        let mut store = WeatherStore::new(AppState::default());

        let slow_fetcher = WeatherFetcher::new(slow, "k");
        for effect in store.fetch("London").effects {
            slow_fetcher.handle(effect, &mut tasks);
        }

        let fast_fetcher = WeatherFetcher::new(Arc::new(FixedApi(Ok(london()))), "k");
        for effect in store.fetch("London").effects {
            fast_fetcher.handle(effect, &mut tasks);
        }

        let action = next_action(&mut rx).await;
        assert!(matches!(
            action,
            Action::WeatherDidLoad { request, .. } if request == RequestId(2)
        ));
        store.dispatch(action);
        assert_eq!(store.fetch_state().data(), Some(&london()));
        assert_eq!(tasks.len(), 1);
    }
}
