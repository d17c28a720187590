//! # Mock Framework
//!
//! Utilities for testing clients without spawning a real store actor.
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, use the client, then
//!   [`verify`](MockClient::verify).
//! - [`create_mock_client`]: get a client plus the raw receiver, and answer
//!   requests by hand with [`expect_create`] / [`expect_action`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Selection};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued answer for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Select(Result<Option<T::Update>, FrameworkError>),
    CurrentSelection(Result<Option<Selection<T::Id, T::Update>>, FrameworkError>),
    UpdateSelected(Result<Option<T>, FrameworkError>),
    Delete(Result<bool, FrameworkError>),
    Action(Result<Option<T::ActionResult>, FrameworkError>),
    Purge(Result<usize, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking.
///
/// Requests are answered in the order expectations were queued. A request
/// that does not match the next expectation panics the mock's background task,
/// which surfaces in the caller as [`FrameworkError::ActorDropped`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_create().return_ok(OrderId(1));
///
/// let client = OrderClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queued = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queued.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Select { respond_to, .. }, Some(Expectation::Select(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::CurrentSelection { respond_to }, Some(Expectation::CurrentSelection(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::UpdateSelected { respond_to, .. }, Some(Expectation::UpdateSelected(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Purge { respond_to, .. }, Some(Expectation::Purge(response))) => {
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

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, Expectation::Create)
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, Expectation::Get)
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, Expectation::List)
    }

    /// Expects a `select` request.
    pub fn expect_select(&mut self) -> ExpectationBuilder<T, Option<T::Update>> {
        ExpectationBuilder::new(&self.expectations, Expectation::Select)
    }

    /// Expects a `current_selection` request.
    pub fn expect_current_selection(
        &mut self,
    ) -> ExpectationBuilder<T, Option<Selection<T::Id, T::Update>>> {
        ExpectationBuilder::new(&self.expectations, Expectation::CurrentSelection)
    }

    /// Expects an `update_selected` request.
    pub fn expect_update_selected(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, Expectation::UpdateSelected)
    }

    /// Expects a `delete` request.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, bool> {
        ExpectationBuilder::new(&self.expectations, Expectation::Delete)
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T, Option<T::ActionResult>> {
        ExpectationBuilder::new(&self.expectations, Expectation::Action)
    }

    /// Expects a `purge` request.
    pub fn expect_purge(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(&self.expectations, Expectation::Purge)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder completing a queued expectation with its response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Expectations<T>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            wrap,
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// Useful when the test wants to inspect the payload a client sends (e.g. that
/// drafts reach the store trimmed and intact) before answering.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<Option<T::ActionResult>, FrameworkError>>,
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
