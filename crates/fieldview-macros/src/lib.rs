//! Procedural macros for `fieldview`.
//!
//! `#[derive(Project)]` turns a struct with named fields into a projectable
//! record: it emits the compile-time field table (name plus `#[access]`
//! annotation, in declaration order) and the per-field copy code that
//! `fieldview::trim` drives. Nothing is inspected at runtime.
//!
//! Shapes that cannot be projected field by field (enums, unions, tuple and
//! unit structs) are rejected at compile time with a spanned error.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod project;

/// Derives `fieldview::Project` for a struct with named fields.
///
/// Each field may carry one `#[access = "..."]` attribute listing the view
/// tags (comma separated) under which the field survives a trim. Fields
/// without the attribute belong to no view.
///
/// The struct must implement `Default` (the zero value every dropped field
/// is reset to) and every field must be `Clone + Debug`.
///
/// # Example
///
/// ```ignore
/// use fieldview::Project;
///
/// #[derive(Debug, Default, Project)]
/// struct Account {
///     id: String,
///     #[access = "pub,priv,create,update"]
///     username: String,
///     #[access = "priv,create"]
///     password: String,
/// }
/// ```
#[proc_macro_derive(Project, attributes(access))]
pub fn derive_project(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    project::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
