//! Main explorer state container

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;

use explorer_api::{HttpTransactionApi, Transaction, TransactionApi};
use explorer_navigation::{
    classify, navigate_to_random_tx, submit_query, Classification, RecentlyViewed,
    RecentlyViewedEntry, Router,
};
use explorer_storage::Database;
use explorer_ui::{
    ColorMode, Environment, NetworkOption, Store, Toast, ToastTone, UiAction, UiState,
    COLOR_MODE_SETTING, NETWORK_SETTING,
};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Explorer instance
///
/// Owns persisted preferences, the UI store and the transaction source.
/// Front ends supply a [`Router`] per call.
pub struct Explorer {
    config: Config,
    db: Database,
    store: Store,
    recent: RecentlyViewed,
    api: Arc<dyn TransactionApi>,
}

impl Explorer {
    /// Open the database at the configured path and build an HTTP client
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let api = HttpTransactionApi::new(Duration::from_secs(config.request_timeout_secs))?;

        Ok(Self::with_parts(config, db, Arc::new(api)))
    }

    pub fn with_parts(config: Config, db: Database, api: Arc<dyn TransactionApi>) -> Self {
        let recent = RecentlyViewed::with_capacity(db.clone(), config.recent_limit);

        Self {
            config,
            db,
            store: Store::new(),
            recent,
            api,
        }
    }

    /// Load networks, environment and the persisted network choice into the store
    pub fn initialize(&self) -> Result<()> {
        self.store
            .dispatch(UiAction::SetNetworks(self.config.networks()));

        if self.config.staging {
            self.store.dispatch(UiAction::SetEnv(Environment::Staging));
        }

        if let Some(stored) = self.db.get_setting(NETWORK_SETTING)? {
            match stored.parse::<NetworkOption>() {
                Ok(network) => {
                    self.store.dispatch(UiAction::SelectNetwork(network));
                }
                Err(e) => tracing::warn!(value = %stored, error = %e, "Ignoring stored network"),
            }
        }

        let state = self.store.state();
        tracing::info!(
            network = %state.selected_network,
            api_server = state.api_server().unwrap_or_default(),
            "Explorer initialized"
        );

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn ui_state(&self) -> UiState {
        self.store.state()
    }

    // === Search ===

    pub fn classify(&self, query: &str) -> Classification {
        classify(query)
    }

    /// Classify and, when valid, navigate to the result page
    pub async fn search<R>(&self, router: &R, query: &str) -> Result<Classification>
    where
        R: Router + ?Sized,
    {
        Ok(submit_query(router, query).await?)
    }

    /// Navigate to a random recent transaction on the selected network
    pub async fn random_transaction<R>(&self, router: &R) -> Result<Transaction>
    where
        R: Router + ?Sized,
    {
        let mut rng = StdRng::from_entropy();
        self.random_transaction_with_rng(router, &mut rng).await
    }

    pub async fn random_transaction_with_rng<R, G>(
        &self,
        router: &R,
        rng: &mut G,
    ) -> Result<Transaction>
    where
        R: Router + ?Sized,
        G: Rng + Send + ?Sized,
    {
        let state = self.store.state();
        let api_server = state.api_server().ok_or_else(|| {
            CoreError::Config(format!(
                "No API server configured for {}",
                state.selected_network
            ))
        })?;

        Ok(navigate_to_random_tx(self.api.as_ref(), router, api_server, rng).await?)
    }

    // === Preferences ===

    /// Switch networks and remember the choice
    pub fn select_network(&self, network: NetworkOption) -> Result<UiState> {
        self.db.set_setting(NETWORK_SETTING, network.as_str())?;
        let state = self.store.dispatch(UiAction::SelectNetwork(network));

        tracing::info!(
            network = %network,
            api_server = state.api_server().unwrap_or_default(),
            "Selected network"
        );

        Ok(state)
    }

    pub fn color_mode(&self, prefers_dark: bool) -> Result<ColorMode> {
        Ok(ColorMode::resolve(self.stored_color_mode()?, prefers_dark))
    }

    /// Flip the color mode and persist the result
    pub fn toggle_color_mode(&self, prefers_dark: bool) -> Result<ColorMode> {
        let next = ColorMode::toggle(self.stored_color_mode()?, prefers_dark);
        self.db.set_setting(COLOR_MODE_SETTING, next.as_str())?;

        tracing::debug!(mode = %next, "Toggled color mode");

        Ok(next)
    }

    fn stored_color_mode(&self) -> Result<Option<ColorMode>> {
        let stored = self.db.get_setting(COLOR_MODE_SETTING)?;
        Ok(stored.and_then(|value| match value.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::warn!(value = %value, error = %e, "Ignoring stored color mode");
                None
            }
        }))
    }

    // === Recently viewed ===

    pub fn record_view(&self, transaction: &Transaction) -> Result<()> {
        Ok(self.recent.record_view(transaction)?)
    }

    pub fn recently_viewed(&self, limit: usize) -> Result<Vec<RecentlyViewedEntry>> {
        Ok(self.recent.recent(limit)?)
    }

    // === UI ===

    /// Advance the app clock to now
    pub fn tick(&self) -> UiState {
        self.tick_at(Utc::now())
    }

    pub fn tick_at(&self, now: DateTime<Utc>) -> UiState {
        self.store.dispatch(UiAction::AppTime(now))
    }

    pub fn add_toast(&self, text: impl Into<String>, tone: ToastTone) -> Toast {
        let toast = Toast::new(text, tone);
        self.store.dispatch(UiAction::AddToast(toast.clone()));
        toast
    }

    pub fn remove_toast(&self, id: &str) -> UiState {
        self.store.dispatch(UiAction::RemoveToast(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use explorer_api::{TransactionList, TransactionListRequest, TransactionType};
    use explorer_navigation::{NavigationError, QueryError, RecordingRouter};
    use parking_lot::Mutex;
    use std::path::PathBuf;

    const HASH: &str = "0x5e9f3933e358df6a73fec0d47ce3e1062c20812c129f5294e6f37a8d27c051d9";

    #[derive(Default)]
    struct FakeApi {
        results: Vec<Transaction>,
        servers: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TransactionApi for FakeApi {
        async fn fetch_tx_list(
            &self,
            request: &TransactionListRequest,
        ) -> explorer_api::Result<TransactionList> {
            self.servers.lock().push(request.api_server.clone());
            Ok(TransactionList {
                results: self.results.clone(),
                ..Default::default()
            })
        }
    }

    fn test_config() -> Config {
        Config::new(PathBuf::from("/tmp/explorer-test"))
    }

    fn test_explorer(config: Config, db: Database, api: Arc<FakeApi>) -> Explorer {
        let explorer = Explorer::with_parts(config, db, api);
        explorer.initialize().unwrap();
        explorer
    }

    #[test]
    fn test_initialize_defaults() {
        let db = Database::open_in_memory().unwrap();
        let explorer = test_explorer(test_config(), db, Arc::new(FakeApi::default()));

        let state = explorer.ui_state();
        assert_eq!(state.env, Environment::Production);
        assert_eq!(state.selected_network, NetworkOption::Testnet);
        assert_eq!(state.api_server(), Some("https://stacks-node-api.blockstack.org"));

        let kinds: Vec<_> = explorer.store().log().iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, vec!["ui/config/network"]);
    }

    #[test]
    fn test_initialize_staging_and_persisted_network() {
        let db = Database::open_in_memory().unwrap();
        db.set_setting(NETWORK_SETTING, "mocknet").unwrap();

        let mut config = test_config();
        config.staging = true;
        let explorer = test_explorer(config, db, Arc::new(FakeApi::default()));

        let state = explorer.ui_state();
        assert_eq!(state.env, Environment::Staging);
        assert_eq!(state.selected_network, NetworkOption::Mocknet);

        let kinds: Vec<_> = explorer.store().log().iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            vec!["ui/config/network", "ui/config/env", "ui/config/network/select"]
        );
    }

    #[test]
    fn test_select_network_persists() {
        let db = Database::open_in_memory().unwrap();
        let explorer = test_explorer(test_config(), db.clone(), Arc::new(FakeApi::default()));

        let state = explorer.select_network(NetworkOption::Mocknet).unwrap();
        assert_eq!(state.api_server(), Some("http://localhost:3999"));

        // a fresh instance over the same database picks the choice up
        let reopened = test_explorer(test_config(), db, Arc::new(FakeApi::default()));
        assert_eq!(reopened.ui_state().selected_network, NetworkOption::Mocknet);
    }

    #[test]
    fn test_color_mode() {
        let db = Database::open_in_memory().unwrap();
        let explorer = test_explorer(test_config(), db.clone(), Arc::new(FakeApi::default()));

        assert_eq!(explorer.color_mode(true).unwrap(), ColorMode::Dark);
        assert_eq!(explorer.toggle_color_mode(true).unwrap(), ColorMode::Light);
        assert_eq!(explorer.color_mode(true).unwrap(), ColorMode::Light);
        assert_eq!(explorer.toggle_color_mode(true).unwrap(), ColorMode::Dark);

        db.set_setting(COLOR_MODE_SETTING, "sepia").unwrap();
        assert_eq!(explorer.color_mode(false).unwrap(), ColorMode::Light);
    }

    #[tokio::test]
    async fn test_search() {
        let db = Database::open_in_memory().unwrap();
        let explorer = test_explorer(test_config(), db, Arc::new(FakeApi::default()));
        let router = RecordingRouter::new();

        let result = explorer.search(&router, HASH).await.unwrap();
        assert!(result.is_ok());
        assert_eq!(router.last_path(), Some(format!("/txid/{HASH}")));

        let result = explorer.search(&router, "   ").await.unwrap();
        assert_eq!(result, Err(QueryError::EmptyQuery));
        assert_eq!(router.routes().len(), 1);
    }

    #[tokio::test]
    async fn test_random_transaction_uses_selected_network() {
        let api = Arc::new(FakeApi {
            results: vec![
                Transaction::new("0x01", TransactionType::Coinbase),
                Transaction::new("0x02", TransactionType::ContractCall),
            ],
            ..Default::default()
        });
        let db = Database::open_in_memory().unwrap();
        let explorer = test_explorer(test_config(), db, api.clone());
        explorer.select_network(NetworkOption::Mocknet).unwrap();

        let router = RecordingRouter::new();
        let mut rng = StdRng::seed_from_u64(11);
        let tx = explorer
            .random_transaction_with_rng(&router, &mut rng)
            .await
            .unwrap();

        assert_eq!(tx.tx_id, "0x02");
        assert_eq!(router.last_path().as_deref(), Some("/txid/0x02"));
        assert_eq!(*api.servers.lock(), vec!["http://localhost:3999".to_string()]);
    }

    #[tokio::test]
    async fn test_random_transaction_errors() {
        let db = Database::open_in_memory().unwrap();
        let router = RecordingRouter::new();

        // no results
        let explorer = test_explorer(test_config(), db.clone(), Arc::new(FakeApi::default()));
        let err = explorer.random_transaction(&router).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Navigation(NavigationError::NoTransactions(_))
        ));

        // no server for the selected network
        let mut config = test_config();
        config.testnet_api_server = String::new();
        let explorer = test_explorer(config, db, Arc::new(FakeApi::default()));
        let err = explorer.random_transaction(&router).await.unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        assert!(router.routes().is_empty());
    }

    #[test]
    fn test_recently_viewed() {
        let db = Database::open_in_memory().unwrap();
        let mut config = test_config();
        config.recent_limit = 2;
        let explorer = test_explorer(config, db, Arc::new(FakeApi::default()));

        for id in ["0x01", "0x02", "0x03"] {
            explorer
                .record_view(&Transaction::new(id, TransactionType::TokenTransfer))
                .unwrap();
        }

        let ids: Vec<_> = explorer
            .recently_viewed(10)
            .unwrap()
            .into_iter()
            .map(|e| e.transaction.tx_id)
            .collect();
        assert_eq!(ids, vec!["0x03", "0x02"]);
    }

    #[test]
    fn test_toasts_and_tick() {
        let db = Database::open_in_memory().unwrap();
        let explorer = test_explorer(test_config(), db, Arc::new(FakeApi::default()));

        let toast = explorer.add_toast("Copied to clipboard", ToastTone::Positive);
        assert_eq!(explorer.ui_state().toasts, vec![toast.clone()]);

        let state = explorer.remove_toast(&toast.id);
        assert!(state.toasts.is_empty());

        let now = Utc::now();
        assert_eq!(explorer.tick_at(now).app_time, Some(now));
        assert!(explorer.tick().app_time.is_some());
    }
}
