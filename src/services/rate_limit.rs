//! Request rate limiting for the write endpoints.
//!
//! This module provides a simple in-memory fixed-window limiter keyed by
//! client address, shared across handlers the same way the repository is.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window length for write-endpoint limiting.
const WINDOW: Duration = Duration::from_secs(60);
/// Requests allowed per client per window.
const MAX_REQUESTS_PER_WINDOW: u32 = 10;

#[derive(Debug, Clone, Copy)]
struct WindowState {
    window_start: Instant,
    count: u32,
}

/// In-memory fixed-window request limiter.
#[derive(Clone)]
pub struct RateLimiter {
    clients: Arc<RwLock<HashMap<IpAddr, WindowState>>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    /// Create a limiter with the default write-endpoint limits.
    pub fn new() -> Self {
        Self::with_limits(MAX_REQUESTS_PER_WINDOW, WINDOW)
    }

    pub fn with_limits(max_requests: u32, window: Duration) -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Record one request from `client` and decide whether it may
    /// proceed. The count resets when the client's window expires.
    pub fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut clients = self.clients.write();
        // Drop clients idle for two full windows
        let window = self.window;
        clients.retain(|_, state| now.duration_since(state.window_start) < window * 2);

        let state = clients.entry(client).or_insert(WindowState {
            window_start: now,
            count: 0,
        });
        if now.duration_since(state.window_start) >= window {
            state.window_start = now;
            state.count = 0;
        }
        state.count += 1;
        state.count <= self.max_requests
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients.read().len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn client(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = RateLimiter::with_limits(3, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.check_at(client(1), start));
        assert!(limiter.check_at(client(1), start));
        assert!(limiter.check_at(client(1), start));
        assert!(!limiter.check_at(client(1), start));
    }

    #[test]
    fn test_clients_are_limited_independently() {
        let limiter = RateLimiter::with_limits(1, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.check_at(client(1), start));
        assert!(!limiter.check_at(client(1), start));
        assert!(limiter.check_at(client(2), start));
    }

    #[test]
    fn test_window_expiry_resets_count() {
        let window = Duration::from_secs(60);
        let limiter = RateLimiter::with_limits(1, window);
        let start = Instant::now();

        assert!(limiter.check_at(client(1), start));
        assert!(!limiter.check_at(client(1), start + Duration::from_secs(30)));
        assert!(limiter.check_at(client(1), start + window));
    }

    #[test]
    fn test_idle_clients_are_dropped() {
        let window = Duration::from_secs(60);
        let limiter = RateLimiter::with_limits(1, window);
        let start = Instant::now();

        limiter.check_at(client(1), start);
        assert_eq!(limiter.tracked_clients(), 1);

        limiter.check_at(client(2), start + window * 3);
        assert_eq!(limiter.tracked_clients(), 1);
    }
}
