//! End-to-end exercise of [`RelayClient`] against an in-process relay
//! stand-in speaking the same WebSocket text protocol.

use chisel_relay::{PortRelay, RelayClient, RelayConfig};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::time::{Duration, timeout};
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn handshake_push_and_poll() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(stream)
            .await
            .expect("websocket handshake");

        // Port announcements must arrive first, receive port before send port.
        let first = ws.next().await.expect("first frame").expect("read");
        assert_eq!(first.into_text().expect("text").as_str(), "r_port,4444");
        let second = ws.next().await.expect("second frame").expect("read");
        assert_eq!(second.into_text().expect("text").as_str(), "s_port,4445");

        // Hand the client a value frame to poll.
        ws.send(Message::text("/test,0.75,/other,1"))
            .await
            .expect("send inbound frame");

        // Then expect the pushed value.
        let third = ws.next().await.expect("third frame").expect("read");
        assert_eq!(third.into_text().expect("text").as_str(), "/knob,0.5");
    });

    let config = RelayConfig {
        url: format!("ws://{addr}"),
        ..RelayConfig::default()
    };
    let cancel = CancellationToken::new();
    let client = RelayClient::connect(&config, cancel.clone())
        .await
        .expect("connect");

    // Poll until the inbound frame lands in the latest-frame snapshot.
    let got = timeout(Duration::from_secs(5), async {
        loop {
            if let Some(v) = client.latest().lookup("/test").map(str::to_string) {
                return v;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("inbound frame never arrived");
    assert_eq!(got, "0.75");

    client.push("/knob", "0.5");

    timeout(Duration::from_secs(5), server)
        .await
        .expect("relay stand-in timed out")
        .expect("relay stand-in panicked");
    cancel.cancel();
}
