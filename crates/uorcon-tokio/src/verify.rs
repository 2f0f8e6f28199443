use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::Rng;

const CODE_MIN: u32 = 10_000;
const CODE_MAX: u32 = 99_999;

/// How long an issued code stays redeemable.
const DEFAULT_CODE_TTL: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone, Copy)]
struct PendingVerification {
    code: u32,
    issued_at: Instant,
}

/// In-memory store of outstanding account-verification codes.
///
/// At most one code is pending per account: reissuing replaces the previous
/// entry. A code is consumed by the first successful [`verify`](Self::verify)
/// and can never match twice.
#[derive(Debug)]
pub struct VerifyStore {
    entries: Mutex<HashMap<String, PendingVerification>>,
    ttl: Duration,
}

impl Default for VerifyStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_CODE_TTL)
    }
}

impl VerifyStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        VerifyStore {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, PendingVerification>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stores a code for `account`, replacing any previous pending code, and
    /// returns it. When `code` is `None` a uniformly random 5-digit code is
    /// drawn.
    pub fn issue(&self, account: &str, code: Option<u32>) -> u32 {
        let code = code.unwrap_or_else(|| rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX));
        let pending = PendingVerification {
            code,
            issued_at: Instant::now(),
        };

        if self.lock().insert(account.to_string(), pending).is_some() {
            log::debug!("replaced pending verification code for account {account}");
        }
        code
    }

    /// Consumes the pending entry for `account` iff `code` matches exactly.
    /// A mismatch or an unknown account leaves the store untouched; an expired
    /// entry is dropped and counts as a mismatch.
    pub fn verify(&self, account: &str, code: u32) -> bool {
        let mut entries = self.lock();
        let Some(pending) = entries.get(account).copied() else {
            return false;
        };

        if pending.issued_at.elapsed() > self.ttl {
            log::debug!("verification code for account {account} expired");
            entries.remove(account);
            return false;
        }

        if pending.code == code {
            entries.remove(account);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_code_verifies_exactly_once() {
        let store = VerifyStore::default();
        let code = store.issue("gandalf", None);

        assert!((CODE_MIN..=CODE_MAX).contains(&code));
        assert!(store.verify("gandalf", code));
        assert!(!store.verify("gandalf", code));
    }

    #[test]
    fn wrong_code_leaves_entry_intact() {
        let store = VerifyStore::default();
        let code = store.issue("gandalf", Some(12345));

        assert!(!store.verify("gandalf", code + 1));
        // the real code still works afterwards
        assert!(store.verify("gandalf", code));
    }

    #[test]
    fn unknown_account_never_verifies() {
        let store = VerifyStore::default();
        assert!(!store.verify("nobody", 12345));
    }

    #[test]
    fn reissue_invalidates_previous_code() {
        let store = VerifyStore::default();
        let first = store.issue("gandalf", Some(11111));
        let second = store.issue("gandalf", Some(22222));

        assert!(!store.verify("gandalf", first));
        assert!(store.verify("gandalf", second));
    }

    #[test]
    fn accounts_do_not_interfere() {
        let store = VerifyStore::default();
        let a = store.issue("frodo", Some(11111));
        let b = store.issue("sam", Some(22222));

        assert!(store.verify("sam", b));
        assert!(store.verify("frodo", a));
    }

    #[test]
    fn expired_code_is_dropped() {
        let store = VerifyStore::with_ttl(Duration::from_millis(1));
        let code = store.issue("gandalf", Some(54321));

        std::thread::sleep(Duration::from_millis(5));
        assert!(!store.verify("gandalf", code));
        // the expired entry is gone, not left behind
        assert!(!store.verify("gandalf", code));
    }
}
