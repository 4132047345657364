use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tidings_core::connector::{NewsProvider, PriceProvider};
use tidings_core::{DateRange, NewsQuery, NewsRecord, PriceBar, TidingsError};

/// Scripted outcome of one provider call.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Succeed with this payload.
    Return(T),
    /// Fail with this error.
    Fail(TidingsError),
    /// Hang indefinitely (simulate a stalled feed).
    Hang,
}

impl<T> MockBehavior<T> {
    async fn run(self) -> Result<T, TidingsError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::Fail(e) => Err(e),
            Self::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
struct InternalState {
    news_rules: HashMap<String, MockBehavior<Vec<NewsRecord>>>,
    price_rules: HashMap<String, MockBehavior<Vec<PriceBar>>>,
    price_requests: Vec<String>,
}

/// Handle for scripting a [`DynamicMock`] while it is shared with a `Tidings`.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `news` calls for a ticker; `"*"` applies to untargeted queries.
    pub async fn set_news_behavior(&self, ticker: &str, behavior: MockBehavior<Vec<NewsRecord>>) {
        let mut guard = self.state.lock().await;
        guard.news_rules.insert(ticker.to_string(), behavior);
    }

    /// Set the behavior for `prices` calls for a ticker.
    pub async fn set_price_behavior(&self, ticker: &str, behavior: MockBehavior<Vec<PriceBar>>) {
        let mut guard = self.state.lock().await;
        guard.price_rules.insert(ticker.to_string(), behavior);
    }

    /// Tickers passed to `prices`, in call order.
    pub async fn price_requests(&self) -> Vec<String> {
        self.state.lock().await.price_requests.clone()
    }

    /// Forget every rule and the recorded price requests.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.news_rules.clear();
        guard.price_rules.clear();
        guard.price_requests.clear();
    }
}

/// News and price provider whose answers are scripted per ticker.
///
/// Without a rule, `news` returns no articles and `prices` fails with `DataSource`.
pub struct DynamicMock {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMock {
    /// Mock reporting `name` plus the controller that scripts it.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        (Arc::new(Self { name, state }), controller)
    }
}

#[async_trait]
impl NewsProvider for DynamicMock {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsRecord>, TidingsError> {
        let key = query.ticker.as_deref().unwrap_or("*");
        // Snapshot the rule so the lock is not held across the await below
        let behavior = {
            let guard = self.state.lock().await;
            guard.news_rules.get(key).cloned()
        };
        match behavior {
            Some(b) => b.run().await,
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl PriceProvider for DynamicMock {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn prices(&self, ticker: &str, range: DateRange) -> Result<Vec<PriceBar>, TidingsError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.price_requests.push(ticker.to_string());
            guard.price_rules.get(ticker).cloned()
        };
        match behavior {
            Some(b) => Ok(b
                .run()
                .await?
                .into_iter()
                .filter(|bar| range.contains(bar.date))
                .collect()),
            None => Err(TidingsError::data_source(
                self.name,
                format!("no behavior configured for {ticker}"),
            )),
        }
    }
}
