//! Aggregator and mock backend running together over real sockets.

use std::time::Duration;

use people_relay::config::MockConfig;
use people_relay::model::Envelope;
use people_relay::{HttpServer, Shutdown};

mod common;

#[tokio::test]
async fn aggregator_republishes_mock_data() {
    let shutdown = Shutdown::new();
    let mock = common::spawn_mock(MockConfig::default(), &shutdown).await;
    let aggregator = common::spawn_aggregator(common::aggregator_config(mock), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/api/data", aggregator))
        .send()
        .await
        .expect("Aggregator unreachable");
    assert_eq!(res.status(), 200);

    let envelope: Envelope = res.json().await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.count, 5);

    let expected = [
        ("1", "Alice Johnson"),
        ("2", "Bob Smith"),
        ("3", "Carol Davis"),
        ("4", "David Wilson"),
        ("5", "Eva Brown"),
    ];
    for (person, (id, name)) in envelope.data.iter().zip(expected) {
        assert_eq!(person.id, id);
        assert_eq!(person.name, name);
        assert!(!person.phone.is_empty());
        assert!(!person.email.is_empty());
    }

    shutdown.trigger();
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let shutdown = Shutdown::new();
    let mock = common::spawn_mock(MockConfig::default(), &shutdown).await;
    let aggregator = common::spawn_aggregator(common::aggregator_config(mock), &shutdown).await;

    let client = common::client();
    let url = format!("http://{}/api/data", aggregator);
    let requests = (0..10).map(|_| {
        let client = client.clone();
        let url = url.clone();
        tokio::spawn(async move { client.get(url).send().await.unwrap().json::<Envelope>().await })
    });

    for handle in requests.collect::<Vec<_>>() {
        let envelope = handle.await.unwrap().unwrap();
        assert_eq!(envelope.count, 5);
        assert_eq!(envelope.count, envelope.data.len());
    }

    shutdown.trigger();
}

#[tokio::test]
async fn shutdown_stops_the_server() {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(common::aggregator_config(common::closed_port().await)).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop");
    assert!(result.unwrap().is_ok());
}
