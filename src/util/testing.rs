// src/util/testing.rs

use std::env;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::error::DomainResult;
use crate::domain::services::link_opener::LinkOpener;

static TEST_ENV: OnceLock<()> = OnceLock::new();

/// Initializes the test environment exactly once (currently: logging).
pub fn init_test_env() {
    TEST_ENV.get_or_init(setup_test_logging);
}

/// Logging setup only runs once; does nothing if `tracing` is already set.
fn setup_test_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Saves and restores the environment variables tests mutate.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    store_path: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            store_path: env::var("MARKLET_STORE_PATH").ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var("MARKLET_STORE_PATH");
        if let Some(val) = &self.store_path {
            env::set_var("MARKLET_STORE_PATH", val);
        }
    }
}

/// Link opener that records the urls it was asked to open instead of
/// touching the platform.
#[derive(Debug, Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("opener lock poisoned").clone()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> DomainResult<()> {
        self.opened
            .lock()
            .expect("opener lock poisoned")
            .push(url.to_string());
        Ok(())
    }
}
