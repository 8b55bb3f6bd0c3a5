//! # Mock Registry
//!
//! Test seam for code that talks to a [`RegistryClient`](crate::client::RegistryClient)
//! without running a [`RegistryActor`](crate::actor::RegistryActor). The mock
//! client sends requests to a channel the test controls; the test inspects
//! each request with the `expect_*` helpers and scripts the response through
//! the captured oneshot sender. That makes failure cases (a closed registry,
//! a scripted resolution error) as easy to exercise as the happy path.

use crate::client::RegistryClient;
use crate::descriptor::TypeDescriptor;
use crate::mapping::ActorMapping;
use crate::message::{RegistryRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(buffer_size: usize) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Register request.
pub async fn expect_register(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(TypeDescriptor, Response<ActorMapping>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Register { target, respond_to }) => Some((target, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Lookup request.
pub async fn expect_lookup(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, Response<Option<ActorMapping>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Lookup { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<Response<Vec<ActorMapping>>> {
    match receiver.recv().await {
        Some(RegistryRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}
