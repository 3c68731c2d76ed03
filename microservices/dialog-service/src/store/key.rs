//! Conversation key derivation
//!
//! A conversation between two users is identified by one canonical key that
//! is independent of who initiated it: the lexicographically smaller identity
//! goes first. Identities may themselves contain the `_` separator, so both
//! halves are escaped (`\` -> `\\`, `_` -> `\_`) before joining; without
//! this, ("a_b", "c") and ("a", "b_c") would collide.

use socialite_core::UserId;
use std::borrow::Cow;
use std::fmt;

/// Canonical, order-independent identifier for a user pair's dialog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogKey(String);

impl DialogKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the conversation key for an unordered pair of users.
///
/// Pure and total: `dialog_key(a, b) == dialog_key(b, a)` for all inputs,
/// and distinct unordered pairs map to distinct keys.
pub fn dialog_key(a: &UserId, b: &UserId) -> DialogKey {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    DialogKey(format!("{}_{}", escape(first.as_str()), escape(second.as_str())))
}

fn escape(id: &str) -> Cow<'_, str> {
    if id.contains(['_', '\\']) {
        Cow::Owned(id.replace('\\', "\\\\").replace('_', "\\_"))
    } else {
        Cow::Borrowed(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_symmetric() {
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");
        assert_eq!(dialog_key(&alice, &bob), dialog_key(&bob, &alice));
    }

    #[test]
    fn test_smaller_identity_goes_first() {
        let key = dialog_key(&UserId::from("zoe"), &UserId::from("amy"));
        assert_eq!(key.as_str(), "amy_zoe");
    }

    #[test]
    fn test_distinct_pairs_get_distinct_keys() {
        let key_ab = dialog_key(&UserId::from("alice"), &UserId::from("bob"));
        let key_ac = dialog_key(&UserId::from("alice"), &UserId::from("carol"));
        assert_ne!(key_ab, key_ac);
    }

    #[test]
    fn test_separator_in_identity_cannot_collide() {
        let left = dialog_key(&UserId::from("a_b"), &UserId::from("c"));
        let right = dialog_key(&UserId::from("a"), &UserId::from("b_c"));
        assert_ne!(left, right);
    }

    #[test]
    fn test_backslash_in_identity_cannot_collide() {
        let left = dialog_key(&UserId::from("a\\"), &UserId::from("_b"));
        let right = dialog_key(&UserId::from("a"), &UserId::from("\\_b"));
        assert_ne!(left, right);
    }
}
