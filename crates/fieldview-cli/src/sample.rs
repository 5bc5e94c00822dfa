//! Sample record used to preview projections.

use fieldview::Project;
use serde::Serialize;

/// A storefront account covering every built-in view plus a purchaser view.
#[derive(Debug, Clone, Default, Serialize, Project)]
pub struct SampleAccount {
    pub id: String,
    #[access = "pub,priv,create,update"]
    pub username: String,
    #[access = "priv,create"]
    pub password: String,
    #[access = "priv,create,update"]
    pub email: String,
    #[access = "pub"]
    pub follower_count: u32,
    #[access = "priv"]
    pub balance_cents: i64,
    #[access = "purchaserOnly"]
    pub license_key: String,
}

impl SampleAccount {
    pub fn new() -> Self {
        Self {
            id: "acct_0001".to_string(),
            username: "ada".to_string(),
            password: "correct-horse".to_string(),
            email: "ada@example.com".to_string(),
            follower_count: 1815,
            balance_cents: 4200,
            license_key: "LK-42-ADA".to_string(),
        }
    }
}
