//! Integration tests for hook chain ordering and failure semantics.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use fletch::{
    Afterware, Client, ClientConfig, Error, Middleware, Readable, Request, RequestOptions,
    RequestOverrides, Response, Result, Route, Transport,
    middleware::{BearerAuth, Logging},
};

struct Health;

impl Route for Health {
    const PATH: &'static str = "/health";
}

impl Readable for Health {
    type Response = serde_json::Value;
}

type EventLog = Arc<Mutex<Vec<String>>>;

fn record(log: &EventLog, event: impl Into<String>) {
    log.lock().expect("lock").push(event.into());
}

/// Transport that records its invocation in the shared event log.
#[derive(Clone)]
struct TracedTransport {
    log: EventLog,
}

#[async_trait]
impl Transport for TracedTransport {
    async fn send(&self, _request: Request) -> Result<Response> {
        record(&self.log, "transport");
        Ok(Response::new(
            200,
            HashMap::new(),
            Some(Bytes::from_static(b"{}")),
        ))
    }
}

/// Counts transport invocations; used to prove the transport never ran.
#[derive(Clone, Default)]
struct CountingTransport {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Transport for CountingTransport {
    async fn send(&self, _request: Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::empty(200))
    }
}

/// Hook that appends its name to the shared event log.
struct Traced {
    name: &'static str,
    log: EventLog,
}

#[async_trait]
impl Middleware for Traced {
    async fn on_request(&self, _request: &mut Request) -> Result<()> {
        record(&self.log, self.name);
        Ok(())
    }
}

#[async_trait]
impl Afterware for Traced {
    async fn on_response(&self, _request: &Request, _response: &Response) -> Result<()> {
        record(&self.log, self.name);
        Ok(())
    }
}

/// Middleware that always raises.
struct Raising;

#[async_trait]
impl Middleware for Raising {
    async fn on_request(&self, _request: &mut Request) -> Result<()> {
        Err(Error::hook("token refresh failed"))
    }
}

#[async_trait]
impl Afterware for Raising {
    async fn on_response(&self, _request: &Request, _response: &Response) -> Result<()> {
        Err(Error::hook("audit sink unavailable"))
    }
}

fn traced(name: &'static str, log: &EventLog) -> Traced {
    Traced {
        name,
        log: Arc::clone(log),
    }
}

#[tokio::test]
async fn hooks_run_in_registration_order_around_transport() {
    let log: EventLog = Arc::default();

    let config = ClientConfig::builder("https://api.example.com")
        .middleware(traced("m1", &log))
        .middleware(traced("m2", &log))
        .afterware(traced("a1", &log))
        .afterware(traced("a2", &log))
        .build();
    let client = Client::with_config(
        TracedTransport {
            log: Arc::clone(&log),
        },
        config,
    );

    client
        .read::<Health>(RequestOptions::new(), RequestOverrides::new())
        .await
        .expect("envelope");

    assert_eq!(
        log.lock().expect("lock").as_slice(),
        ["m1", "m2", "transport", "a1", "a2"]
    );
}

#[tokio::test]
async fn middleware_mutations_are_visible_downstream() {
    /// Middleware asserting an earlier middleware's header is present.
    struct Expecting;

    #[async_trait]
    impl Middleware for Expecting {
        async fn on_request(&self, request: &mut Request) -> Result<()> {
            assert_eq!(request.header("Authorization"), Some("Bearer chain-token"));
            Ok(())
        }
    }

    /// Transport asserting the mutated descriptor reached the wire.
    struct AssertingTransport;

    #[async_trait]
    impl Transport for AssertingTransport {
        async fn send(&self, request: Request) -> Result<Response> {
            assert_eq!(request.header("Authorization"), Some("Bearer chain-token"));
            Ok(Response::empty(200))
        }
    }

    let config = ClientConfig::builder("https://api.example.com")
        .middleware(BearerAuth::new("chain-token"))
        .middleware(Expecting)
        .build();
    let client = Client::with_config(AssertingTransport, config);

    client
        .read::<Health>(RequestOptions::new(), RequestOverrides::new())
        .await
        .expect("envelope");
}

#[tokio::test]
async fn raising_middleware_skips_transport_and_rejects() {
    let transport = CountingTransport::default();
    let config = ClientConfig::builder("https://api.example.com")
        .middleware(Raising)
        .build();
    let client = Client::with_config(transport.clone(), config);

    let err = client
        .read::<Health>(RequestOptions::new(), RequestOverrides::new())
        .await
        .expect_err("should fail");

    assert!(err.is_hook());
    assert_eq!(err.to_string(), "hook error: token refresh failed");
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn raising_middleware_halts_remaining_middlewares() {
    let log: EventLog = Arc::default();

    let config = ClientConfig::builder("https://api.example.com")
        .middleware(traced("m1", &log))
        .middleware(Raising)
        .middleware(traced("m3", &log))
        .build();
    let client = Client::with_config(CountingTransport::default(), config);

    client
        .read::<Health>(RequestOptions::new(), RequestOverrides::new())
        .await
        .expect_err("should fail");

    assert_eq!(log.lock().expect("lock").as_slice(), ["m1"]);
}

#[tokio::test]
async fn raising_afterware_rejects_after_transport() {
    let log: EventLog = Arc::default();

    let config = ClientConfig::builder("https://api.example.com")
        .afterware(Raising)
        .afterware(traced("a2", &log))
        .build();
    let client = Client::with_config(
        TracedTransport {
            log: Arc::clone(&log),
        },
        config,
    );

    let err = client
        .read::<Health>(RequestOptions::new(), RequestOverrides::new())
        .await
        .expect_err("should fail");

    assert!(err.is_hook());
    // Transport ran, the second afterware never did
    assert_eq!(log.lock().expect("lock").as_slice(), ["transport"]);
}

#[tokio::test]
async fn afterware_sees_the_frozen_request() {
    /// Afterware asserting the descriptor it observes is the dispatched one.
    struct FrozenCheck;

    #[async_trait]
    impl Afterware for FrozenCheck {
        async fn on_response(&self, request: &Request, response: &Response) -> Result<()> {
            assert_eq!(request.url(), "https://api.example.com/health");
            assert_eq!(request.header("Authorization"), Some("Bearer frozen"));
            assert_eq!(response.status(), 200);
            Ok(())
        }
    }

    let log: EventLog = Arc::default();
    let config = ClientConfig::builder("https://api.example.com")
        .middleware(BearerAuth::new("frozen"))
        .afterware(FrozenCheck)
        .afterware(Logging::new())
        .build();
    let client = Client::with_config(TracedTransport { log }, config);

    client
        .read::<Health>(RequestOptions::new(), RequestOverrides::new())
        .await
        .expect("envelope");
}
