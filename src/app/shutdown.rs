//! Graceful shutdown handling for the scheduler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag; the scheduler checks it before every frame.
#[derive(Clone, Default)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Requests shutdown when Ctrl+C arrives. Must be called inside a tokio runtime.
    pub fn install_ctrl_c_handler(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }
}
