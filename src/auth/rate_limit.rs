use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const MAX_ATTEMPTS: usize = 5;
const WINDOW_SECS: u64 = 900; // 15 minutes

/// Per-IP failed-login counter over a sliding window.
#[derive(Clone, Default)]
pub struct RateLimiter {
    attempts: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the given IP is rate-limited. Returns true if blocked.
    /// Also lazily cleans up stale entries for the checked IP.
    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let cutoff = Instant::now().checked_sub(Duration::from_secs(WINDOW_SECS));

        let Some(timestamps) = map.get_mut(&ip) else {
            return false;
        };
        if let Some(cutoff) = cutoff {
            timestamps.retain(|t| *t > cutoff);
        }
        if timestamps.is_empty() {
            map.remove(&ip);
            return false;
        }
        timestamps.len() >= MAX_ATTEMPTS
    }

    /// Record a failed login attempt for the given IP.
    pub fn record_failure(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(ip).or_default().push(Instant::now());
    }

    /// Clear all recorded attempts for the given IP (call on successful login).
    pub fn clear(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&ip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn blocks_after_max_failures() {
        let limiter = RateLimiter::new();
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        for _ in 0..MAX_ATTEMPTS - 1 {
            limiter.record_failure(ip);
        }
        assert!(!limiter.is_blocked(ip));
        limiter.record_failure(ip);
        assert!(limiter.is_blocked(ip));

        let other = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));
        assert!(!limiter.is_blocked(other));
    }

    #[test]
    fn clear_resets_ip() {
        let limiter = RateLimiter::new();
        let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
        for _ in 0..MAX_ATTEMPTS {
            limiter.record_failure(ip);
        }
        limiter.clear(ip);
        assert!(!limiter.is_blocked(ip));
    }

    #[test]
    fn expired_entries_are_dropped() {
        let limiter = RateLimiter::new();
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 3));
        let Some(stale) = Instant::now().checked_sub(Duration::from_secs(WINDOW_SECS + 1)) else {
            return;
        };
        limiter
            .attempts
            .lock()
            .unwrap()
            .insert(ip, vec![stale; MAX_ATTEMPTS]);

        assert!(!limiter.is_blocked(ip));
        assert!(!limiter.attempts.lock().unwrap().contains_key(&ip));
    }
}
