//! Record projection.
//!
//! [`trim`] copies the fields of a record whose access annotation matches the
//! requested view into a fresh `Default` value of the same type. Fields are
//! visited in declaration order and the input is never modified.

use crate::annotation::AccessAnnotation;
use crate::config::ViewConfig;
use crate::error::{ProjectionError, Result};
use crate::view::ViewId;
use std::fmt;
use tracing::info;

/// Name and access annotation of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub access: &'static str,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, access: &'static str) -> Self {
        Self { name, access }
    }

    /// Parsed form of the field's annotation.
    pub const fn annotation(&self) -> AccessAnnotation<'static> {
        AccessAnnotation::new(self.access)
    }
}

/// A record whose fields can be projected into views.
///
/// Implemented through `#[derive(Project)]`; hand-written impls must keep
/// `FIELDS` and the index-based methods in agreement.
pub trait Project: Default {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Every field in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Copies field `index` from `self` into `target`. Out-of-range indices
    /// are ignored.
    fn copy_field(&self, index: usize, target: &mut Self);

    /// Returns field `index` for diagnostic output.
    fn field_value(&self, index: usize) -> Option<&dyn fmt::Debug>;

    /// Shorthand for [`trim`].
    fn trimmed(&self, view: &ViewId, config: &ViewConfig) -> Result<Self> {
        trim(self, view, config)
    }
}

/// Projects `record` into `view`.
///
/// Fields whose annotation matches the view's tag are cloned from `record`;
/// every other field keeps its `Default` value. With logging enabled one
/// INFO event is emitted per kept field.
///
/// # Errors
///
/// Returns [`ProjectionError::UnknownView`] if `config` has no tag for
/// `view`.
///
/// # Example
///
/// ```
/// use fieldview::{Project, ViewConfig, ViewId, trim};
///
/// #[derive(Debug, Default, PartialEq, Project)]
/// struct Account {
///     id: String,
///     #[access = "pub,priv"]
///     username: String,
///     #[access = "priv"]
///     email: String,
/// }
///
/// let account = Account {
///     id: "42".into(),
///     username: "ada".into(),
///     email: "ada@example.com".into(),
/// };
///
/// let public = trim(&account, &ViewId::Public, &ViewConfig::default())?;
/// assert_eq!(
///     public,
///     Account { username: "ada".into(), ..Account::default() }
/// );
/// # Ok::<(), fieldview::ProjectionError>(())
/// ```
pub fn trim<T: Project>(record: &T, view: &ViewId, config: &ViewConfig) -> Result<T> {
    let tag = config
        .tag_for(view)
        .ok_or_else(|| ProjectionError::UnknownView { view: view.clone() })?;
    let mode = config.match_mode();

    let mut trimmed = T::default();
    for (index, field) in T::FIELDS.iter().enumerate() {
        if !mode.matches(field.access, tag) {
            continue;
        }

        record.copy_field(index, &mut trimmed);

        if config.log_enabled() {
            if let Some(value) = record.field_value(index) {
                info!(
                    target: "fieldview::project",
                    record = T::NAME,
                    field = field.name,
                    view = %view,
                    value = ?value,
                    "keep"
                );
            }
        }
    }

    Ok(trimmed)
}

/// Projects `record` into each of `views`, in order.
///
/// Fails on the first view without a configured tag.
pub fn trim_all<'v, T, I>(record: &T, views: I, config: &ViewConfig) -> Result<Vec<T>>
where
    T: Project,
    I: IntoIterator<Item = &'v ViewId>,
{
    views
        .into_iter()
        .map(|view| trim(record, view, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::TagMatch;
    use proptest::prelude::*;
    use test_case::test_case;

    const PURCHASER: ViewId = ViewId::custom("purchaser");

    #[derive(Debug, Clone, Default, PartialEq, crate::Project)]
    struct Listing {
        id: u64,
        #[access = "pub,priv,create,update"]
        title: String,
        #[access = "priv,create"]
        cost: u32,
        #[access = "pub"]
        price: u32,
        #[access = "purchaserOnly"]
        download_url: String,
        #[access = "recreate"]
        revision: u8,
    }

    fn listing() -> Listing {
        Listing {
            id: 7,
            title: "Lamp".to_string(),
            cost: 10,
            price: 25,
            download_url: "https://example.com/lamp".to_string(),
            revision: 3,
        }
    }

    fn config() -> ViewConfig {
        ViewConfig::default().extend([(PURCHASER, "purchaserOnly")])
    }

    #[test]
    fn test_field_table_follows_declaration_order() {
        let names: Vec<&str> = Listing::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["id", "title", "cost", "price", "download_url", "revision"]
        );
        assert_eq!(Listing::NAME, "Listing");
        assert!(Listing::FIELDS[0].annotation().is_empty());
    }

    #[test_case(ViewId::Create, &["title", "cost"]; "create")]
    #[test_case(ViewId::Update, &["title"]; "update")]
    #[test_case(ViewId::Public, &["title", "price"]; "public")]
    #[test_case(ViewId::Private, &["title", "cost"]; "private")]
    #[test_case(PURCHASER, &["download_url"]; "custom")]
    fn test_trim_keeps_only_matching_fields(view: ViewId, kept: &[&str]) {
        let source = listing();
        let trimmed = trim(&source, &view, &config()).unwrap();

        let expected = Listing {
            id: 0,
            title: if kept.contains(&"title") { source.title.clone() } else { String::new() },
            cost: if kept.contains(&"cost") { source.cost } else { 0 },
            price: if kept.contains(&"price") { source.price } else { 0 },
            download_url: if kept.contains(&"download_url") {
                source.download_url.clone()
            } else {
                String::new()
            },
            revision: 0,
        };
        assert_eq!(trimmed, expected);
    }

    #[test]
    fn test_trim_does_not_modify_source() {
        let source = listing();
        let _ = trim(&source, &ViewId::Public, &config()).unwrap();
        assert_eq!(source, listing());
    }

    #[test]
    fn test_trim_unknown_view_is_an_error() {
        let result = trim(&listing(), &PURCHASER, &ViewConfig::default());
        assert_eq!(
            result,
            Err(ProjectionError::UnknownView { view: PURCHASER })
        );
    }

    #[test]
    fn test_trim_with_empty_config_rejects_built_in_views() {
        let result = trim(&listing(), &ViewId::Public, &ViewConfig::empty());
        assert!(matches!(result, Err(ProjectionError::UnknownView { .. })));
    }

    #[test]
    fn test_token_mode_ignores_partial_tokens() {
        let trimmed = trim(&listing(), &ViewId::Create, &config()).unwrap();
        assert_eq!(trimmed.revision, 0);
    }

    #[test]
    fn test_substring_mode_keeps_partial_tokens() {
        let legacy = config().with_match_mode(TagMatch::Substring);
        let trimmed = trim(&listing(), &ViewId::Create, &legacy).unwrap();

        assert_eq!(trimmed.revision, 3);
        assert_eq!(trimmed.cost, 10);
    }

    #[test]
    fn test_trim_with_logging_keeps_same_result() {
        let quiet = trim(&listing(), &ViewId::Private, &config()).unwrap();
        let logged = trim(&listing(), &ViewId::Private, &config().enable_logs()).unwrap();
        assert_eq!(quiet, logged);
    }

    #[test]
    fn test_trimmed_forwards_to_trim() {
        let source = listing();
        assert_eq!(
            source.trimmed(&ViewId::Public, &config()),
            trim(&source, &ViewId::Public, &config())
        );
    }

    #[test]
    fn test_trim_all_returns_one_record_per_view() {
        let views = [ViewId::Public, ViewId::Private];
        let trimmed = trim_all(&listing(), &views, &config()).unwrap();

        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed[0].price, 25);
        assert_eq!(trimmed[1].price, 0);
        assert_eq!(trimmed[1].cost, 10);
    }

    #[test]
    fn test_trim_all_fails_on_unknown_view() {
        let views = [ViewId::Public, ViewId::custom("auditor")];
        let result = trim_all(&listing(), &views, &config());

        assert_eq!(
            result,
            Err(ProjectionError::UnknownView {
                view: ViewId::custom("auditor")
            })
        );
    }

    fn any_listing() -> impl Strategy<Value = Listing> {
        (
            any::<u64>(),
            ".{0,12}",
            any::<u32>(),
            any::<u32>(),
            ".{0,12}",
            any::<u8>(),
        )
            .prop_map(|(id, title, cost, price, download_url, revision)| Listing {
                id,
                title,
                cost,
                price,
                download_url,
                revision,
            })
    }

    fn any_view() -> impl Strategy<Value = ViewId> {
        prop_oneof![
            Just(ViewId::Create),
            Just(ViewId::Update),
            Just(ViewId::Public),
            Just(ViewId::Private),
            Just(PURCHASER),
        ]
    }

    proptest! {
        #[test]
        fn prop_trim_is_idempotent(source in any_listing(), view in any_view()) {
            let config = config();
            let once = trim(&source, &view, &config).unwrap();
            let twice = trim(&once, &view, &config).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_unannotated_fields_are_always_zeroed(source in any_listing(), view in any_view()) {
            let trimmed = trim(&source, &view, &config()).unwrap();
            prop_assert_eq!(trimmed.id, 0);
        }

        #[test]
        fn prop_kept_fields_equal_source(source in any_listing(), view in any_view()) {
            let config = config();
            let tag = config.tag_for(&view).unwrap();
            let trimmed = trim(&source, &view, &config).unwrap();

            for (index, field) in Listing::FIELDS.iter().enumerate() {
                let kept = format!("{:?}", trimmed.field_value(index).unwrap());
                let expected = if field.annotation().contains(tag) {
                    format!("{:?}", source.field_value(index).unwrap())
                } else {
                    format!("{:?}", Listing::default().field_value(index).unwrap())
                };
                prop_assert_eq!(kept, expected);
            }
        }
    }
}
