use restprobe::{User, UserApiClient};
use serde_json::json;
use std::env;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, Once};
use std::time::Duration;
use tokio::time::sleep;

static SERVER_INIT: Once = Once::new();
static SERVER_BINARY_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);
static CLIENT_INIT: Once = Once::new();
static CLIENT_BINARY_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);

pub fn find_available_port() -> Result<u16, Box<dyn std::error::Error>> {
    // Bind to port 0 to let the OS choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

pub fn ensure_server_binary() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(p) = option_env!("CARGO_BIN_EXE_server") {
        return Ok(PathBuf::from(p));
    }
    SERVER_INIT.call_once(|| {
        eprintln!("Building server binary for integration tests...");
        let output = Command::new("cargo")
            .args(["build", "--bin", "server"])
            .output()
            .expect("Failed to build server binary");
        if !output.status.success() {
            panic!(
                "Failed to build server binary: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        *SERVER_BINARY_PATH.lock().unwrap() = Some(PathBuf::from("target/debug/server"));
    });
    Ok(SERVER_BINARY_PATH
        .lock()
        .unwrap()
        .as_ref()
        .expect("server binary path should be set")
        .clone())
}

pub fn ensure_client_binary() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(p) = option_env!("CARGO_BIN_EXE_client") {
        return Ok(PathBuf::from(p));
    }
    CLIENT_INIT.call_once(|| {
        eprintln!("Building client binary for integration tests...");
        let output = Command::new("cargo")
            .args(["build", "--bin", "client"])
            .output()
            .expect("Failed to build client binary");
        if !output.status.success() {
            panic!(
                "Failed to build client binary: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        *CLIENT_BINARY_PATH.lock().unwrap() = Some(PathBuf::from("target/debug/client"));
    });
    Ok(CLIENT_BINARY_PATH
        .lock()
        .unwrap()
        .as_ref()
        .expect("client binary path should be set")
        .clone())
}

pub fn get_timeout_config() -> (u32, u64) {
    // Returns (max_attempts, sleep_ms)
    if env::var("CI").is_ok() {
        eprintln!("CI environment detected; using extended timeouts");
        (60, 500)
    } else {
        (30, 500)
    }
}

pub struct TestServer {
    process: Child,
    port: u16,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let port = find_available_port()?;
        let server_binary = ensure_server_binary()?;
        let (max_attempts, sleep_ms) = get_timeout_config();

        let mut process = Command::new(&server_binary)
            .args(["--port", &port.to_string()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        let health_url = format!("http://127.0.0.1:{port}/health");

        for attempt in 0..max_attempts {
            sleep(Duration::from_millis(sleep_ms)).await;

            if let Ok(Some(exit_status)) = process.try_wait() {
                eprintln!("Stub server exited early with status: {exit_status}");
                return Err("Stub server exited before becoming ready".into());
            }

            match client.get(&health_url).send().await {
                Ok(response) if response.status().is_success() => {
                    eprintln!(
                        "Server ready on port {} after {} attempts",
                        port,
                        attempt + 1
                    );
                    return Ok(TestServer { process, port });
                }
                Ok(response) => {
                    eprintln!(
                        "Health check attempt {}: HTTP {}",
                        attempt + 1,
                        response.status()
                    );
                }
                // Not accepting connections yet
                Err(_) => {}
            }
        }

        let _ = process.kill();
        Err("Stub server did not become healthy within timeout".into())
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

// Helper struct for common test operations
pub struct TestHarness {
    pub client: reqwest::Client,
    pub base_url: String,
    pub api: UserApiClient,
}

#[allow(dead_code)]
impl TestHarness {
    pub fn new(server: &TestServer) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: server.base_url(),
            api: UserApiClient::new(server.base_url()),
        }
    }

    /// Seed one user, asserting the create contract held.
    pub async fn create_user(&self, name: &str, email: &str) -> User {
        let response = self
            .api
            .create_user(&json!({ "name": name, "email": email }))
            .await
            .expect("create request should reach the server");
        assert_eq!(
            response.status(),
            201,
            "seeding a user should succeed, got body: {}",
            response.text()
        );
        response
            .json_as()
            .expect("created user should deserialize")
    }

    pub async fn health_check(&self) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
    }
}
