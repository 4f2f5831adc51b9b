//! Navigation dispatch: search submission and random transaction

use rand::seq::SliceRandom;
use rand::Rng;

use explorer_api::{Transaction, TransactionApi, TransactionListRequest, TransactionType};

use crate::error::NavigationError;
use crate::query::{classify, Classification};
use crate::router::{txid_path, Router, TXID_ROUTE_TEMPLATE};
use crate::Result;

/// Transaction types requested when picking a random transaction
pub fn random_tx_types() -> Vec<TransactionType> {
    vec![
        TransactionType::SmartContract,
        TransactionType::ContractCall,
        TransactionType::TokenTransfer,
    ]
}

/// Classify `query` and, if it is valid, route to its detail page.
///
/// The path uses the query exactly as typed. Invalid queries are returned
/// without touching the router.
pub async fn submit_query<R>(router: &R, query: &str) -> Result<Classification>
where
    R: Router + ?Sized,
{
    let classification = classify(query);

    match &classification {
        Ok(kind) => {
            tracing::info!(query, kind = ?kind, "Navigating to search result");
            router.push(TXID_ROUTE_TEMPLATE, &txid_path(query)).await?;
        }
        Err(e) => {
            tracing::debug!(query, reason = %e, "Rejected search query");
        }
    }

    Ok(classification)
}

/// Pick uniformly among non-coinbase transactions, or among all of them when
/// every transaction is a coinbase.
pub fn select_random_transaction<'a, G>(
    transactions: &'a [Transaction],
    rng: &mut G,
) -> Option<&'a Transaction>
where
    G: Rng + ?Sized,
{
    let non_coinbase: Vec<&Transaction> =
        transactions.iter().filter(|tx| !tx.is_coinbase()).collect();

    if non_coinbase.is_empty() {
        transactions.choose(rng)
    } else {
        non_coinbase.choose(rng).copied()
    }
}

/// Fetch recent transactions from `api_server` and route to a random one.
///
/// Fetch and router failures propagate as-is; there is no retry.
pub async fn navigate_to_random_tx<A, R, G>(
    api: &A,
    router: &R,
    api_server: &str,
    rng: &mut G,
) -> Result<Transaction>
where
    A: TransactionApi + ?Sized,
    R: Router + ?Sized,
    G: Rng + ?Sized,
{
    let request = TransactionListRequest::new(api_server).with_types(random_tx_types());
    let list = api.fetch_tx_list(&request).await?;

    let chosen = select_random_transaction(&list.results, rng)
        .cloned()
        .ok_or_else(|| NavigationError::NoTransactions(api_server.to_string()))?;

    tracing::info!(
        tx_id = %chosen.tx_id,
        tx_type = %chosen.tx_type,
        candidates = list.results.len(),
        "Navigating to random transaction"
    );

    router
        .push(TXID_ROUTE_TEMPLATE, &txid_path(&chosen.tx_id))
        .await?;

    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use explorer_api::{ApiError, TransactionList};
    use parking_lot::Mutex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::query::{QueryError, QueryKind};
    use crate::router::RecordingRouter;

    const HASH: &str = "5e9f3933e358df6a73fec0d47ce3e1062c20812c129f5294e6f37a8d27c051d9";

    struct FakeApi {
        results: Vec<Transaction>,
        requests: Mutex<Vec<TransactionListRequest>>,
    }

    impl FakeApi {
        fn new(results: Vec<Transaction>) -> Self {
            Self {
                results,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TransactionApi for FakeApi {
        async fn fetch_tx_list(
            &self,
            request: &TransactionListRequest,
        ) -> explorer_api::Result<TransactionList> {
            self.requests.lock().push(request.clone());
            Ok(TransactionList {
                results: self.results.clone(),
                ..Default::default()
            })
        }
    }

    struct FailingApi;

    #[async_trait]
    impl TransactionApi for FailingApi {
        async fn fetch_tx_list(
            &self,
            _request: &TransactionListRequest,
        ) -> explorer_api::Result<TransactionList> {
            Err(ApiError::Server {
                status: 502,
                message: "bad gateway".to_string(),
            })
        }
    }

    fn tx(id: &str, tx_type: TransactionType) -> Transaction {
        Transaction::new(id, tx_type)
    }

    #[tokio::test]
    async fn test_submit_valid_query_navigates() {
        let router = RecordingRouter::new();

        let classification = submit_query(&router, HASH).await.unwrap();
        assert!(matches!(classification, Ok(QueryKind::TransactionId(_))));

        let routes = router.routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].template, TXID_ROUTE_TEMPLATE);
        assert_eq!(routes[0].path, format!("/txid/{HASH}"));
    }

    #[tokio::test]
    async fn test_submit_invalid_query_does_not_navigate() {
        let router = RecordingRouter::new();

        let classification = submit_query(&router, "not-an-address.hello").await.unwrap();
        assert_eq!(classification, Err(QueryError::InvalidContractName));
        assert!(router.routes().is_empty());
    }

    #[test]
    fn test_select_skips_coinbase() {
        let txs = vec![
            tx("0x01", TransactionType::Coinbase),
            tx("0x02", TransactionType::TokenTransfer),
            tx("0x03", TransactionType::Coinbase),
            tx("0x04", TransactionType::ContractCall),
        ];

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let chosen = select_random_transaction(&txs, &mut rng).unwrap();
            assert!(!chosen.is_coinbase());
        }
    }

    #[test]
    fn test_select_reaches_every_candidate() {
        let txs = vec![
            tx("0x01", TransactionType::TokenTransfer),
            tx("0x02", TransactionType::SmartContract),
            tx("0x03", TransactionType::ContractCall),
        ];

        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(select_random_transaction(&txs, &mut rng).unwrap().tx_id.clone());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_select_falls_back_to_coinbase() {
        let txs = vec![
            tx("0x01", TransactionType::Coinbase),
            tx("0x02", TransactionType::Coinbase),
        ];

        let mut rng = StdRng::seed_from_u64(1);
        let chosen = select_random_transaction(&txs, &mut rng).unwrap();
        assert!(chosen.is_coinbase());

        assert!(select_random_transaction(&[], &mut rng).is_none());
    }

    #[tokio::test]
    async fn test_navigate_to_random_tx() {
        let api = FakeApi::new(vec![
            tx("0xaa", TransactionType::Coinbase),
            tx("0xbb", TransactionType::SmartContract),
        ]);
        let router = RecordingRouter::new();
        let mut rng = StdRng::seed_from_u64(3);

        let chosen = navigate_to_random_tx(&api, &router, "http://localhost:3999", &mut rng)
            .await
            .unwrap();

        assert_eq!(chosen.tx_id, "0xbb");
        assert_eq!(router.last_path().as_deref(), Some("/txid/0xbb"));

        let requests = api.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].api_server, "http://localhost:3999");
        assert_eq!(requests[0].types, random_tx_types());
    }

    #[tokio::test]
    async fn test_navigate_to_random_tx_empty_results() {
        let api = FakeApi::new(Vec::new());
        let router = RecordingRouter::new();
        let mut rng = StdRng::seed_from_u64(3);

        let err = navigate_to_random_tx(&api, &router, "http://localhost:3999", &mut rng)
            .await
            .unwrap_err();

        assert!(matches!(err, NavigationError::NoTransactions(_)));
        assert!(router.routes().is_empty());
    }

    #[tokio::test]
    async fn test_navigate_to_random_tx_fetch_failure() {
        let router = RecordingRouter::new();
        let mut rng = StdRng::seed_from_u64(3);

        let err = navigate_to_random_tx(&FailingApi, &router, "http://localhost:3999", &mut rng)
            .await
            .unwrap_err();

        assert!(matches!(err, NavigationError::Api(ApiError::Server { status: 502, .. })));
        assert!(router.routes().is_empty());
    }
}
