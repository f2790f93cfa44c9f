//! Wall clock used for token expiry checks.

use chrono::{DateTime, Utc};
use gdap_portal_application::ports::Clock;

/// Reads the host's UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdap_portal_domain::{CachedToken, TokenGrant};

    #[test]
    fn test_fresh_grant_is_valid_on_wall_clock() {
        let grant = TokenGrant {
            access_token: "tok".to_string(),
            expires_in: 3599,
        };
        let cached = CachedToken::from_grant(&grant, SystemClock.now_epoch_ms());
        assert!(cached.is_valid_at(SystemClock.now_epoch_ms()));
    }
}
