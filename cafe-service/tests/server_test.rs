use cafe_service::{config::CafeConfig, startup::Application};
use serde_json::{json, Value};
use tokio::sync::oneshot;

#[tokio::test]
async fn serves_over_tcp_and_shuts_down_gracefully() {
    let app = Application::build(CafeConfig::in_memory())
        .await
        .expect("Failed to build application");
    let port = app.port();
    assert_ne!(port, 0);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(app.run_with_shutdown(async {
        let _ = stop_rx.await;
    }));

    let base = format!("http://127.0.0.1:{}", port);
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to reach server");
    assert!(health.status().is_success());

    let created: Value = client
        .post(format!("{}/api/reservations", base))
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "9876543210",
            "date": "2025-06-14",
            "time": "19:30",
            "guests": 2
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["status"], "pending");

    let fetched: Value = client
        .get(format!(
            "{}/api/reservations/{}",
            base,
            created["id"].as_str().unwrap()
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    stop_tx.send(()).unwrap();
    server
        .await
        .expect("Server task panicked")
        .expect("Server returned an error");
}
