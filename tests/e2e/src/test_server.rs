use anyhow::Result;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// The `web` binary running in local mode, so contact submissions are logged
/// instead of reaching Formspree.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = get_random_port()?;

        let process = Command::new("cargo")
            .args(["run", "--package", "web", "--features", "server"])
            .env("APP_MODE", "local")
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let url = format!("http://localhost:{}", port);
        let server = Self {
            url,
            process: Some(process),
        };

        // Dropping `server` on failure kills the child.
        wait_for_server(&server.url).await?;

        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
            let _ = process.wait();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // Wait up to 60 seconds for server to start (compilation + startup)
    for i in 0..600 {
        if let Ok(response) = reqwest::get(format!("{url}/api/health")).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 60s)")
}
