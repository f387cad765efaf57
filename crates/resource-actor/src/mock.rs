//! # Mock Client
//!
//! [`MockClient<T>`] answers the same request surface as a real actor but from
//! a queue of scripted expectations, entirely in memory. Use it to unit-test
//! client wrappers (orchestration, error mapping, filtering) without spawning
//! any actors: responses are instant and fully deterministic, and error
//! injection is a one-liner (`return_err`).
//!
//! For testing an actor's own logic, spawn the real [`ResourceActor`]
//! (`crate::ResourceActor`) instead; for whole-system flows, wire everything
//! and test end to end. The three levels together form the testing pyramid
//! used across this workspace.
//!
//! The raw [`create_mock_client`] / `expect_*` helpers are a lower-level
//! alternative that hands you the request channel directly, so a test can
//! inspect payloads before answering.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted response for one expected request.
#[allow(dead_code)] // ids are recorded for future payload assertions
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Insert {
        response: Result<(), FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Room>::new();
/// mock.expect_get(RoomId::from(1)).return_ok(Some(room));
/// mock.expect_create().return_ok(RoomId::from(2));
///
/// let client = mock.client();
/// // drive the wrapper under test with `client`...
/// mock.verify(); // all expectations consumed
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectations lock poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .expect("expectations lock poisoned")
            .push_back(expectation);
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ResponseBuilder<'_, T, T::Id> {
        ResponseBuilder {
            mock: self,
            build: Box::new(|response| Expectation::Create { response }),
        }
    }

    /// Expects an `insert` operation.
    pub fn expect_insert(&mut self) -> ResponseBuilder<'_, T, ()> {
        ResponseBuilder {
            mock: self,
            build: Box::new(|response| Expectation::Insert { response }),
        }
    }

    /// Expects a `get` operation for the given id.
    pub fn expect_get(&mut self, id: T::Id) -> ResponseBuilder<'_, T, Option<T>> {
        ResponseBuilder {
            mock: self,
            build: Box::new(move |response| Expectation::Get { id, response }),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ResponseBuilder<'_, T, Vec<T>> {
        ResponseBuilder {
            mock: self,
            build: Box::new(|response| Expectation::List { response }),
        }
    }

    /// Expects a `delete` operation for the given id.
    pub fn expect_delete(&mut self, id: T::Id) -> ResponseBuilder<'_, T, ()> {
        ResponseBuilder {
            mock: self,
            build: Box::new(move |response| Expectation::Delete { id, response }),
        }
    }

    /// Expects an `action` operation against the given id.
    pub fn expect_action(&mut self, id: T::Id) -> ResponseBuilder<'_, T, T::ActionResult> {
        ResponseBuilder {
            mock: self,
            build: Box::new(move |response| Expectation::Action { id, response }),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectations lock poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Terminal step of an expectation: pick the scripted response.
pub struct ResponseBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<'a, T: ActorEntity, R> ResponseBuilder<'a, T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The returned client sends to a channel the test controls; the test pops
/// requests off `receiver`, inspects the payloads, and answers through the
/// bundled oneshot senders. Use this when the fluent [`MockClient`] hides too
/// much.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next message and asserts it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next message and asserts it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next message and asserts it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Receives the next message and asserts it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
