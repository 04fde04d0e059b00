use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TaskStats {
    completed_today: usize,
    pending: usize,
    high_priority: usize,
    overdue: usize,
}

#[derive(Debug, Deserialize)]
struct WaterToday {
    total: u32,
    goal: u32,
    entries: usize,
}

#[derive(Debug, Deserialize)]
struct TimerView {
    running: bool,
    focus_time: u32,
    break_time: u32,
    time_left: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("dashboard_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/dashboard")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_dashboard"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_json<T: for<'de> Deserialize<'de>>(client: &Client, url: String) -> T {
    client.get(url).send().await.unwrap().json().await.unwrap()
}

#[tokio::test]
async fn http_task_create_and_toggle_updates_stats() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let stats_url = format!("{}/api/tasks/stats", server.base_url);

    let before: TaskStats = get_json(&client, stats_url.clone()).await;

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&json!({ "title": "  write report  ", "priority": "high" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let task: Value = response.json().await.unwrap();
    assert_eq!(task["title"], "write report");
    assert_eq!(task["completed"], false);

    let after_create: TaskStats = get_json(&client, stats_url.clone()).await;
    assert_eq!(after_create.pending, before.pending + 1);
    assert_eq!(after_create.high_priority, before.high_priority + 1);
    assert_eq!(after_create.overdue, before.overdue);

    let id = task["id"].as_str().unwrap();
    let toggled: Value = client
        .post(format!("{}/api/tasks/{id}/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["completed"], true);

    let after_toggle: TaskStats = get_json(&client, stats_url).await;
    assert_eq!(after_toggle.completed_today, before.completed_today + 1);
    assert_eq!(after_toggle.pending, before.pending);
    assert_eq!(after_toggle.high_priority, before.high_priority);
}

#[tokio::test]
async fn http_blank_task_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&json!({ "title": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_unknown_ids_are_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/tasks/does-not-exist", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/api/notes/does-not-exist", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_water_add_and_undo() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let today_url = format!("{}/api/water/today", server.base_url);

    let before: WaterToday = get_json(&client, today_url.clone()).await;
    assert_eq!(before.goal, 2500);

    let response = client
        .post(format!("{}/api/water", server.base_url))
        .json(&json!({ "amount": 250 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let after: WaterToday = get_json(&client, today_url.clone()).await;
    assert_eq!(after.total, before.total + 250);
    assert_eq!(after.entries, before.entries + 1);

    let response = client
        .delete(format!("{}/api/water/last", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let undone: WaterToday = get_json(&client, today_url).await;
    assert_eq!(undone.total, before.total);

    let response = client
        .post(format!("{}/api/water", server.base_url))
        .json(&json!({ "amount": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_first_workout_sets_personal_records() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/fitness/workouts", server.base_url))
        .json(&json!({
            "exercise_id": "run-trail",
            "duration": 45.0,
            "distance": 5.0,
            "elevation_gain": 600.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let outcome: Value = response.json().await.unwrap();
    assert!(outcome["log"]["calories"].as_u64().unwrap() > 0);
    assert!(!outcome["new_records"].as_array().unwrap().is_empty());

    let records: Vec<Value> =
        get_json(&client, format!("{}/api/fitness/records", server.base_url)).await;
    assert!(records.iter().any(|r| r["exerciseId"] == "run-trail" && r["type"] == "highest_elevation"));

    let response = client
        .post(format!("{}/api/fitness/workouts", server.base_url))
        .json(&json!({ "exercise_id": "no-such-exercise", "duration": 10.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_timer_settings_are_clamped() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let view: TimerView = client
        .put(format!("{}/api/timer/settings", server.base_url))
        .json(&json!({ "focus_time": 500, "break_time": 0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view.focus_time, 120);
    assert_eq!(view.break_time, 5);
    assert!(!view.running);
    assert_eq!(view.time_left, 120 * 60);
}

#[tokio::test]
async fn http_week_summary_has_seven_days() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let summary: Value = get_json(&client, format!("{}/api/summary/week", server.base_url)).await;
    assert_eq!(summary["daily"].as_array().unwrap().len(), 7);
    assert_eq!(summary["is_current_week"], true);
    let score = summary["score"].as_u64().unwrap();
    assert!((50..=100).contains(&score));

    let comparison: Value =
        get_json(&client, format!("{}/api/summary/weekly", server.base_url)).await;
    assert!(comparison["current"]["week"].as_str().unwrap().contains("-W"));
}

#[tokio::test]
async fn http_estimate_rejects_non_positive_duration() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for duration in ["-30", "0", "NaN"] {
        let response = client
            .get(format!(
                "{}/api/fitness/estimate?exercise_id=yoga&duration={duration}",
                server.base_url
            ))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "duration={duration}");
    }

    let estimate: Value = get_json(
        &client,
        format!("{}/api/fitness/estimate?exercise_id=yoga&duration=60", server.base_url),
    )
    .await;
    assert_eq!(estimate["calories"], 210);
}
