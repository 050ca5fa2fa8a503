//! Graceful shutdown handling for the application.
//!
//! Ctrl+C arrives either as a signal (outside raw mode) or as a key event
//! (inside raw mode); both end up here.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

/// Conventional exit status after SIGINT (128 + 2).
pub const SIGINT_EXIT_CODE: i32 = 130;

/// Shared stop flag plus the process exit code.
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    exit_code: Arc<AtomicI32>,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            exit_code: Arc::new(AtomicI32::new(0)),
        }
    }

    /// Requests shutdown.
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    /// Checks if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Requests shutdown and records the status the process should exit with.
    pub fn request_exit(&self, code: i32) {
        self.set_exit_code(code);
        self.request_shutdown();
    }

    /// Spawns a task that requests shutdown on SIGINT.
    pub fn listen_for_ctrl_c(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_exit(SIGINT_EXIT_CODE);
            }
        });
    }

    pub fn set_exit_code(&self, code: i32) {
        self.exit_code.store(code, Ordering::SeqCst);
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_manager_new() {
        let manager = ShutdownManager::new();
        assert!(!manager.is_shutdown_requested());
        assert_eq!(manager.exit_code(), 0);
    }

    #[test]
    fn test_shutdown_request_is_shared() {
        let manager = ShutdownManager::new();
        let handle = manager.clone();
        handle.request_shutdown();
        assert!(manager.is_shutdown_requested());
    }

    #[test]
    fn test_exit_code() {
        let manager = ShutdownManager::new();
        manager.set_exit_code(1);
        assert_eq!(manager.exit_code(), 1);
    }

    #[test]
    fn test_signal_exit_code_reaches_owner() {
        let manager = ShutdownManager::new();
        let listener = manager.clone();
        listener.request_exit(SIGINT_EXIT_CODE);
        assert!(manager.is_shutdown_requested());
        assert_eq!(manager.exit_code(), SIGINT_EXIT_CODE);
    }
}
