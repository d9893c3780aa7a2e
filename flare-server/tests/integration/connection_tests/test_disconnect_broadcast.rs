use flare_core::{ClientId, SignalKind};
use flare_server::SignalingHub;

use crate::integration::init_tracing;
use crate::utils::TestClient;

#[tokio::test]
async fn test_disconnect_notifies_remaining_clients() {
    init_tracing();

    let hub = SignalingHub::new();
    let mut a = TestClient::join(&hub);
    let mut b = TestClient::join(&hub);
    let mut c = TestClient::join(&hub);
    for client in [&mut a, &mut b, &mut c] {
        client.drain();
    }

    hub.disconnect(&a.id);

    assert_eq!(hub.client_count(), 2);
    for survivor in [&mut b, &mut c] {
        let notice = survivor.recv_envelope().await;
        assert_eq!(notice.kind, SignalKind::ClientDisconnect);
        assert_eq!(notice.from, a.id);
        assert!(notice.to.is_none());
        survivor.assert_silent();
    }
    a.assert_silent();
}

#[tokio::test]
async fn test_removing_an_unknown_id_is_a_noop() {
    init_tracing();

    let hub = SignalingHub::new();
    let mut a = TestClient::join(&hub);
    let mut b = TestClient::join(&hub);
    a.drain();
    b.drain();

    hub.disconnect(&ClientId::from("never-connected"));

    assert_eq!(hub.client_count(), 2);
    a.assert_silent();
    b.assert_silent();
}
