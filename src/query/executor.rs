use std::sync::Arc;

use crate::query::response::{StatusData, StatusResponse};
use crate::query::transport::StatusTransport;
use crate::query::types::{QueryResult, ServerAddress, ServerStatus};
use crate::util::errors::QueryError;

/// Runs one status lookup on a dedicated worker task so a slow endpoint only
/// stalls its own command, never the rest of the message loop. The caller
/// suspends once, on the join handle; a worker panic comes back as a
/// `Failed` result instead of tearing anything down.
pub async fn query(transport: Arc<dyn StatusTransport>, address: ServerAddress) -> QueryResult {
    let worker = tokio::spawn(async move { lookup(transport.as_ref(), &address).await });

    match worker.await {
        Ok(result) => result,
        Err(e) => QueryResult::Failed(QueryError::Internal(e.to_string())),
    }
}

/// Single-attempt fetch and normalization. Retry policy is left to the
/// caller; none is performed here.
pub async fn lookup(transport: &dyn StatusTransport, address: &ServerAddress) -> QueryResult {
    tracing::debug!("Querying status of {}", address);

    match transport.fetch(address).await {
        Ok(body) => normalize(&body),
        Err(e) => QueryResult::Failed(e),
    }
}

fn normalize(body: &str) -> QueryResult {
    let response: StatusResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return QueryResult::Failed(QueryError::InvalidResponse),
    };

    if response.status.as_deref() != Some("success") {
        return QueryResult::Failed(QueryError::RemoteError);
    }

    let data = match response.data {
        Some(data) => data,
        None => return QueryResult::Failed(QueryError::MissingField("data".to_string())),
    };

    match online_status(data) {
        Ok(status) => QueryResult::Online(status),
        Err(e) => QueryResult::Failed(e),
    }
}

// Fields pass through untransformed; the first absent one names the error.
fn online_status(data: StatusData) -> Result<ServerStatus, QueryError> {
    Ok(ServerStatus {
        version: require(data.version, "version")?,
        online: require(data.online, "online")?,
        max: require(data.max, "max")?,
        motd: require(data.description, "description")?,
        query_time_ms: require(data.query_time, "queryTime")?,
    })
}

fn require<T>(field: Option<T>, name: &str) -> Result<T, QueryError> {
    field.ok_or_else(|| QueryError::MissingField(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockTransport {
        reply: crate::util::errors::Result<String>,
        calls: AtomicUsize,
    }

    impl MockTransport {
        fn replying(body: impl Into<String>) -> Self {
            Self {
                reply: Ok(body.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: QueryError) -> Self {
            Self {
                reply: Err(error),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatusTransport for MockTransport {
        async fn fetch(&self, _address: &ServerAddress) -> crate::util::errors::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    struct PanickingTransport;

    #[async_trait]
    impl StatusTransport for PanickingTransport {
        async fn fetch(&self, _address: &ServerAddress) -> crate::util::errors::Result<String> {
            panic!("transport blew up");
        }
    }

    fn success_body() -> String {
        serde_json::json!({
            "status": "success",
            "data": {
                "version": "1.20.1",
                "online": 5,
                "max": 20,
                "description": "Welcome",
                "queryTime": 42
            }
        })
        .to_string()
    }

    fn address() -> ServerAddress {
        ServerAddress::new("103.205.253.14", 23007)
    }

    #[tokio::test]
    async fn test_online_fields_pass_through() {
        let transport = MockTransport::replying(success_body());

        let result = lookup(&transport, &address()).await;

        assert_eq!(
            result,
            QueryResult::Online(ServerStatus {
                version: "1.20.1".to_string(),
                online: 5,
                max: 20,
                motd: "Welcome".to_string(),
                query_time_ms: 42,
            })
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_each_missing_field_is_named() {
        for field in ["version", "online", "max", "description", "queryTime"] {
            let mut data = serde_json::json!({
                "version": "1.20.1",
                "online": 5,
                "max": 20,
                "description": "Welcome",
                "queryTime": 42
            });
            data.as_object_mut().unwrap().remove(field);
            let body = serde_json::json!({"status": "success", "data": data}).to_string();

            let transport = MockTransport::replying(body);
            let result = lookup(&transport, &address()).await;

            assert_eq!(
                result,
                QueryResult::Failed(QueryError::MissingField(field.to_string()))
            );
        }
    }

    #[tokio::test]
    async fn test_missing_data_object() {
        let transport = MockTransport::replying(r#"{"status": "success"}"#);

        let result = lookup(&transport, &address()).await;

        assert_eq!(
            result,
            QueryResult::Failed(QueryError::MissingField("data".to_string()))
        );
    }

    #[tokio::test]
    async fn test_remote_error_status() {
        let transport = MockTransport::replying(r#"{"status": "error"}"#);
        let result = lookup(&transport, &address()).await;
        assert_eq!(result, QueryResult::Failed(QueryError::RemoteError));

        let transport = MockTransport::replying(r#"{"data": {}}"#);
        let result = lookup(&transport, &address()).await;
        assert_eq!(result, QueryResult::Failed(QueryError::RemoteError));
    }

    #[tokio::test]
    async fn test_unparseable_body() {
        let transport = MockTransport::replying("<html>not json</html>");

        let result = lookup(&transport, &address()).await;

        assert_eq!(result, QueryResult::Failed(QueryError::InvalidResponse));
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let transport = MockTransport::failing(QueryError::Unreachable);

        let result = lookup(&transport, &address()).await;

        assert_eq!(result, QueryResult::Failed(QueryError::Unreachable));
    }

    #[tokio::test]
    async fn test_worker_panic_becomes_internal_error() {
        let result = query(Arc::new(PanickingTransport), address()).await;

        match result {
            QueryResult::Failed(QueryError::Internal(_)) => {}
            other => panic!("expected internal error, got {:?}", other),
        }
    }
}
