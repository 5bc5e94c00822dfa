//! Expansion of `#[derive(Project)]`.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Error, Expr, ExprLit, Field, Fields, Ident, Lit, Meta, Result,
    ext::IdentExt, spanned::Spanned,
};

/// Name of the field attribute carrying the access annotation.
const ACCESS_ATTR: &str = "access";

/// A single field as seen by the derive.
pub(crate) struct FieldSpec {
    pub ident: Ident,
    pub access: String,
}

impl FieldSpec {
    fn from_field(field: &Field) -> Result<Self> {
        // Named fields always carry an ident; the caller filters tuple structs.
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "`Project` fields must be named"))?;

        let mut access: Option<String> = None;
        for attr in &field.attrs {
            if !attr.path().is_ident(ACCESS_ATTR) {
                continue;
            }
            if access.is_some() {
                return Err(Error::new_spanned(
                    attr,
                    "duplicate `#[access]` attribute; list every tag in a single annotation",
                ));
            }
            access = Some(parse_access(attr)?);
        }

        Ok(FieldSpec {
            ident,
            access: access.unwrap_or_default(),
        })
    }
}

/// Parses `#[access = "pub,priv"]`.
fn parse_access(attr: &Attribute) -> Result<String> {
    let Meta::NameValue(meta) = &attr.meta else {
        return Err(Error::new_spanned(
            attr,
            "expected `#[access = \"tag,tag,...\"]`",
        ));
    };

    match &meta.value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) => Ok(value.value()),
        other => Err(Error::new_spanned(
            other,
            "access annotation must be a string literal",
        )),
    }
}

/// Collects the named fields of a struct, rejecting every other shape.
fn named_fields(input: &DeriveInput) -> Result<Vec<FieldSpec>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(Error::new(
                data.enum_token.span,
                "`Project` can only be derived for structs with named fields, not enums",
            ));
        }
        Data::Union(data) => {
            return Err(Error::new(
                data.union_token.span,
                "`Project` can only be derived for structs with named fields, not unions",
            ));
        }
    };

    match &data.fields {
        Fields::Named(named) => named.named.iter().map(FieldSpec::from_field).collect(),
        Fields::Unnamed(_) => Err(Error::new_spanned(
            &input.ident,
            "`Project` requires named fields; tuple structs are not supported",
        )),
        Fields::Unit => Err(Error::new_spanned(
            &input.ident,
            "`Project` requires named fields; unit structs have nothing to project",
        )),
    }
}

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let fields = named_fields(input)?;

    let ident = &input.ident;
    let record_name = ident.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let descriptors = fields.iter().map(|field| {
        let name = field.ident.unraw().to_string();
        let access = &field.access;
        quote! { ::fieldview::FieldDescriptor::new(#name, #access) }
    });

    let copy_arms = fields.iter().enumerate().map(|(index, field)| {
        let index = Literal::usize_unsuffixed(index);
        let member = &field.ident;
        quote! {
            #index => target.#member = ::core::clone::Clone::clone(&self.#member),
        }
    });

    let value_arms = fields.iter().enumerate().map(|(index, field)| {
        let index = Literal::usize_unsuffixed(index);
        let member = &field.ident;
        quote! {
            #index => ::core::option::Option::Some(&self.#member),
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldview::Project for #ident #ty_generics #where_clause {
            const NAME: &'static str = #record_name;

            const FIELDS: &'static [::fieldview::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            #[allow(unused_variables)]
            fn copy_field(&self, index: usize, target: &mut Self) {
                match index {
                    #(#copy_arms)*
                    _ => {}
                }
            }

            #[allow(unused_variables)]
            fn field_value(&self, index: usize) -> ::core::option::Option<&dyn ::core::fmt::Debug> {
                match index {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
