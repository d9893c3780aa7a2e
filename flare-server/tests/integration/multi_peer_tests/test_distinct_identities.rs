use flare_server::SignalingHub;
use std::collections::HashSet;

use crate::integration::init_tracing;
use crate::utils::TestClient;

#[tokio::test]
async fn test_every_join_gets_a_distinct_identity() {
    init_tracing();

    let hub = SignalingHub::new();
    let clients: Vec<TestClient> = (0..5).map(|_| TestClient::join(&hub)).collect();

    assert_eq!(hub.client_count(), 5);

    let ids: HashSet<_> = clients.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids.len(), 5);
}
