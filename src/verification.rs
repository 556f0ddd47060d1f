//! Staff verification gate.
//!
//! Resolves a presented pickup code (scanned or typed) against the order's
//! current [`VerificationToken`]. The comparison is exact string equality;
//! a stale (rotated-out) code simply no longer matches. Rejections carry no
//! detail about why they failed.

use crate::session::token::VerificationToken;

/// Outcome of a verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Accepts iff `presented` is non-empty and equals the current token's code.
///
/// Wrong codes, rotated-out codes, empty input and a missing token all come
/// back as the same [`Verdict::Rejected`].
pub fn verify(presented: &str, current: Option<&VerificationToken>) -> Verdict {
    match current {
        Some(token) if !presented.is_empty() && presented == token.code => Verdict::Accepted,
        _ => Verdict::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_accepted() {
        let token = VerificationToken::mint("7421", 1000);
        assert_eq!(verify("PICKUP-7421-1000", Some(&token)), Verdict::Accepted);
    }

    #[test]
    fn stale_timestamp_is_rejected() {
        let token = VerificationToken::mint("7421", 1000);
        assert_eq!(verify("PICKUP-7421-999", Some(&token)), Verdict::Rejected);
    }

    #[test]
    fn token_for_another_order_is_rejected() {
        let token = VerificationToken::mint("7421", 1000);
        let other = VerificationToken::mint("8812", 1000);
        assert_eq!(verify(&other.code, Some(&token)), Verdict::Rejected);
    }

    #[test]
    fn empty_code_is_rejected() {
        let token = VerificationToken::mint("7421", 1000);
        assert_eq!(verify("", Some(&token)), Verdict::Rejected);
    }

    #[test]
    fn missing_token_rejects_everything() {
        assert_eq!(verify("PICKUP-7421-1000", None), Verdict::Rejected);
        assert_eq!(verify("", None), Verdict::Rejected);
    }
}
