//! View identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Names a view a record can be projected into.
///
/// The four built-in views cover the usual REST boundaries. Anything else is
/// a [`ViewId::Custom`] view minted by the caller:
///
/// ```
/// use fieldview::ViewId;
///
/// const PURCHASER: ViewId = ViewId::custom("purchaser");
///
/// assert_eq!(PURCHASER.to_string(), "purchaser");
/// assert_eq!("pub".parse::<ViewId>().unwrap(), ViewId::Public);
/// ```
///
/// Parsing maps the built-in names (`create`, `update`, `pub`/`public`,
/// `priv`/`private`) onto the built-in variants. A custom view minted with
/// one of those names is folded onto the built-in one by
/// [`ViewConfig`](crate::ViewConfig) (see [`ViewId::canonical`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewId {
    /// Fields a client may set when creating the record.
    Create,
    /// Fields a client may set when updating the record.
    Update,
    /// Fields visible to every client.
    Public,
    /// Fields visible only to the owning client.
    Private,
    /// Caller-defined view.
    Custom(Cow<'static, str>),
}

impl ViewId {
    /// Every built-in view, in declaration order.
    pub const BUILT_IN: [ViewId; 4] = [
        ViewId::Create,
        ViewId::Update,
        ViewId::Public,
        ViewId::Private,
    ];

    /// Creates a custom view identifier.
    pub const fn custom(name: &'static str) -> Self {
        ViewId::Custom(Cow::Borrowed(name))
    }

    /// Returns the canonical name of this view.
    pub fn name(&self) -> &str {
        match self {
            ViewId::Create => "create",
            ViewId::Update => "update",
            ViewId::Public => "pub",
            ViewId::Private => "priv",
            ViewId::Custom(name) => &**name,
        }
    }

    /// Returns `true` for the four built-in views.
    pub fn is_built_in(&self) -> bool {
        !matches!(self, ViewId::Custom(_))
    }

    /// Maps a built-in name or alias to its variant.
    pub fn built_in_named(name: &str) -> Option<Self> {
        match name {
            "create" => Some(ViewId::Create),
            "update" => Some(ViewId::Update),
            "pub" | "public" => Some(ViewId::Public),
            "priv" | "private" => Some(ViewId::Private),
            _ => None,
        }
    }

    /// Folds a custom view named after a built-in onto the built-in variant,
    /// so `ViewId::custom("pub")` and `ViewId::Public` name one view.
    pub fn canonical(self) -> Self {
        if let ViewId::Custom(name) = &self {
            if let Some(built_in) = ViewId::built_in_named(name) {
                return built_in;
            }
        }
        self
    }
}

impl Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<&str> for ViewId {
    fn from(name: &str) -> Self {
        ViewId::built_in_named(name)
            .unwrap_or_else(|| ViewId::Custom(Cow::Owned(name.to_string())))
    }
}

impl From<String> for ViewId {
    fn from(name: String) -> Self {
        ViewId::from(name.as_str())
    }
}

impl From<ViewId> for String {
    fn from(view: ViewId) -> Self {
        match view {
            ViewId::Custom(name) => name.into_owned(),
            built_in => built_in.name().to_string(),
        }
    }
}

impl FromStr for ViewId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ViewId::from(s))
    }
}
