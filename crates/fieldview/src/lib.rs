//! # fieldview: per-view record projection
//!
//! One canonical record type, many boundaries. A field declares which views
//! may see it; [`trim`] produces a copy of the record holding only those
//! fields, with everything else reset to its `Default` value.
//!
//! ```text
//! ┌────────────────────────────┐
//! │  Account (full record)     │
//! └─────────────┬──────────────┘
//!               │ trim(&account, &ViewId::Public, &config)
//!               ▼
//! ┌────────────────────────────┐
//! │  ViewConfig                │
//! │  ├─ Public  → "pub"        │
//! │  └─ field #[access] tokens │
//! └─────────────┬──────────────┘
//!               ▼
//! ┌────────────────────────────┐
//! │  Account (public fields,   │
//! │  others defaulted)         │
//! └────────────────────────────┘
//! ```
//!
//! ## Views
//!
//! | View      | Default tag | Typical use                    |
//! |-----------|-------------|--------------------------------|
//! | `Create`  | `create`    | fields a client may set on create |
//! | `Update`  | `update`    | fields a client may set on update |
//! | `Public`  | `pub`       | response to any client         |
//! | `Private` | `priv`      | response to the owning client  |
//! | `Custom`  | caller set  | anything else (`extend`)       |
//!
//! ## Example
//!
//! ```
//! use fieldview::{Project, ViewConfig, ViewId, trim};
//!
//! #[derive(Debug, Default, PartialEq, Project)]
//! struct Account {
//!     id: String,
//!     #[access = "pub,priv,create,update"]
//!     username: String,
//!     #[access = "priv,create"]
//!     password: String,
//!     #[access = "purchaserOnly"]
//!     license_key: String,
//! }
//!
//! const PURCHASER: ViewId = ViewId::custom("purchaser");
//!
//! let config = ViewConfig::default().extend([(PURCHASER, "purchaserOnly")]);
//! let account = Account {
//!     id: "foo".into(),
//!     username: "bar".into(),
//!     password: "baz".into(),
//!     license_key: "key".into(),
//! };
//!
//! let create = trim(&account, &ViewId::Create, &config)?;
//! assert_eq!(create.username, "bar");
//! assert_eq!(create.password, "baz");
//! assert_eq!(create.id, "");
//!
//! let purchaser = trim(&account, &PURCHASER, &config)?;
//! assert_eq!(purchaser.license_key, "key");
//! assert_eq!(purchaser.username, "");
//!
//! // Views without a tag are rejected rather than silently matching.
//! assert!(trim(&account, &ViewId::custom("auditor"), &config).is_err());
//! # Ok::<(), fieldview::ProjectionError>(())
//! ```
//!
//! ## Matching
//!
//! Tags are compared against the comma separated tokens of a field's
//! annotation by exact equality, so `create` does not match `recreate`.
//! The legacy substring rule is available as [`TagMatch::Substring`].
//!
//! ## Logging
//!
//! With [`ViewConfig::enable_logs`] every kept field is reported through
//! `tracing` at INFO level under the `fieldview::project` target. The crate
//! never installs a subscriber.

pub mod annotation;
pub mod config;
pub mod error;
pub mod loader;
pub mod project;
pub mod validate;
pub mod view;

// Lets the derive's `::fieldview::` paths resolve inside this crate.
extern crate self as fieldview;

pub use fieldview_macros::Project;

// Re-export commonly used types
pub use annotation::{AccessAnnotation, TagMatch};
pub use config::ViewConfig;
pub use error::{ConfigError, ProjectionError, Result};
pub use loader::ConfigLoader;
pub use project::{FieldDescriptor, Project, trim, trim_all};
pub use validate::{Conflict, Validator, validate};
pub use view::ViewId;
