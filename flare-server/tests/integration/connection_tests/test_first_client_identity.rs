use flare_core::SignalKind;
use flare_server::SignalingHub;
use serde_json::Value;

use crate::integration::init_tracing;
use crate::utils::TestClient;

#[tokio::test]
async fn test_first_client_gets_identity_and_nothing_else() {
    init_tracing();

    let hub = SignalingHub::new();
    let mut client = TestClient::join(&hub);

    let envelope = client.recv_envelope().await;
    assert_eq!(envelope.kind, SignalKind::ClientId);
    assert_eq!(envelope.from, client.id);
    assert_eq!(envelope.data, Some(Value::String(client.id.to_string())));
    assert!(envelope.to.is_none());

    client.assert_silent();
    assert_eq!(hub.client_count(), 1);
}
