use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;

pub const TEST_TOKEN: &str = "secret_321";

static SERVER: OnceLock<TestServer> = OnceLock::new();

// The store rewrites the whole data file without a lock, so a request racing
// a mutation can observe a half-written file. Tests that share a server take
// this lock to stay sequential.
static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

pub fn serialize_tests() -> std::sync::MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    // Kept alive for the whole run: dropping it would delete the data file
    #[allow(dead_code)]
    data_dir: tempfile::TempDir,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn(seed: &Value) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Each test binary gets its own seeded data file
        let data_dir = tempfile::tempdir().context("failed to create data dir")?;
        let data_path = data_dir.path().join("products.json");
        std::fs::write(&data_path, serde_json::to_vec(seed)?)
            .context("failed to seed data file")?;

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-api"));
        cmd.env("CATALOG_API_PORT", port.to_string())
            .env("CATALOG_DATA_PATH", &data_path)
            .env("TOKEN", TEST_TOKEN)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            data_dir,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Consider server ready on any non-404 response
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server(seed: &Value) -> Result<&'static TestServer> {
    // Use stable get_or_init and convert init errors into a panic with context.
    let server = SERVER.get_or_init(|| TestServer::spawn(seed).expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Catalog entry helper for seed files
pub fn product(id: i64, name: &str, price: f64, is_published: bool) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "quantity": 5,
        "code_value": format!("C{:04}", id),
        "is_published": is_published,
        "expiration": "15/09/2022",
        "price": price,
    })
}
