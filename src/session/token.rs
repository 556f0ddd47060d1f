//! Rotating pickup verification tokens (the simulated QR payload).

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// The code a customer shows at the counter.
///
/// At most one token is current for an order at any instant; minting a
/// replacement invalidates the previous one immediately, with no grace
/// overlap. There is no cryptographic binding, the code is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Opaque payload, `PICKUP-<orderId>-<epochMillis>`.
    pub code: String,
    pub issued_at_ms: u64,
}

impl VerificationToken {
    pub fn mint(order_id: &str, issued_at_ms: u64) -> Self {
        Self {
            code: format!("PICKUP-{order_id}-{issued_at_ms}"),
            issued_at_ms,
        }
    }
}

/// Wall-clock milliseconds since the Unix epoch.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_embeds_order_id_and_timestamp() {
        let token = VerificationToken::mint("7421", 1700000000000);
        assert_eq!(token.code, "PICKUP-7421-1700000000000");
        assert_eq!(token.issued_at_ms, 1700000000000);
    }

    #[test]
    fn different_orders_or_timestamps_never_collide() {
        let a = VerificationToken::mint("7421", 1000);
        let b = VerificationToken::mint("8812", 1000);
        let c = VerificationToken::mint("7421", 1001);
        assert_ne!(a.code, b.code);
        assert_ne!(a.code, c.code);
    }
}
