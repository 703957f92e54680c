//! Invitation entity - a code for inviting alumni into the association

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::Id;

/// Invitation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    pub code: String,
    pub inviter_id: Id,
    /// Recipient email addresses; persisted as a JSON array
    pub recipients: Vec<String>,
    pub message: Option<String>,
    pub uses: i32,
    pub max_uses: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Create a new Invitation
    pub fn new(code: String, inviter_id: Id, recipients: Vec<String>) -> Self {
        Self {
            code,
            inviter_id,
            recipients,
            message: None,
            uses: 0,
            max_uses: None,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a personal message
    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    /// Set an expiration in whole days from creation
    pub fn with_expiration_days(mut self, days: i64) -> Self {
        if days > 0 {
            self.expires_at = Some(self.created_at + Duration::days(days));
        }
        self
    }

    /// Cap the number of redemptions
    pub fn with_max_uses(mut self, max_uses: i32) -> Self {
        if max_uses > 0 {
            self.max_uses = Some(max_uses);
        }
        self
    }

    /// Check if the invitation is expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// `is_expired` relative to an explicit instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now > expires_at,
            None => false,
        }
    }

    /// Check if the invitation has reached max uses
    pub fn is_exhausted(&self) -> bool {
        match self.max_uses {
            Some(max) => self.uses >= max,
            None => false,
        }
    }

    /// Check if the invitation can still be redeemed
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_exhausted()
    }

    /// Whole days until expiry, floored at zero; None when non-expiring
    pub fn days_until_expiry(&self) -> Option<i64> {
        self.days_until_expiry_at(Utc::now())
    }

    /// `days_until_expiry` relative to an explicit instant
    pub fn days_until_expiry_at(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at
            .map(|expires_at| (expires_at - now).num_days().max(0))
    }

    /// Increment the redemption count
    pub fn increment_uses(&mut self) {
        self.uses += 1;
    }

    /// Remaining redemptions (None if unlimited)
    pub fn remaining_uses(&self) -> Option<i32> {
        self.max_uses.map(|max| max - self.uses)
    }
}

/// Generate a random 8-character alphanumeric invitation code
pub fn generate_invitation_code() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const CODE_LEN: usize = 8;

    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
