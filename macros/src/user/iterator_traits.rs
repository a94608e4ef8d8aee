use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Type, parse_quote};

use crate::common::{TypeSlot, parse_type_slots};

/// Lifetime name bound by the generated `Reference<'iter>`.
const REFERENCE_LIFETIME: &str = "iter";

/// #[derive(IteratorTraits)] reads `#[iterator(...)]` and fills the
/// five associated types, defaulting the last three.
pub fn expand_derive_iterator_traits(input: DeriveInput) -> TokenStream2 {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if let syn::Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "IteratorTraits cannot be derived for unions",
        ));
    }

    let reference_lifetime =
        syn::Lifetime::new(&format!("'{REFERENCE_LIFETIME}"), Span::call_site());
    if input.generics.lifetimes().any(|l| l.lifetime == reference_lifetime) {
        return Err(syn::Error::new_spanned(
            &input.generics,
            format!(
                "lifetime `'{REFERENCE_LIFETIME}` is reserved for the derived \
                 `Reference<'{REFERENCE_LIFETIME}>`"
            ),
        ));
    }

    let mut slots = [
        TypeSlot::new("category"),
        TypeSlot::new("value"),
        TypeSlot::new("difference"),
        TypeSlot::new("pointer"),
        TypeSlot::new("reference"),
    ];
    parse_type_slots(&input.attrs, "iterator", &mut slots)?;
    let [category, value, difference, pointer, reference] = slots.map(|s| s.value);

    let missing = |key: &str| {
        syn::Error::new_spanned(&input.ident, format!("missing `#[iterator({key} = ...)]`"))
    };
    let category = category.ok_or_else(|| missing("category"))?;
    let value = value.ok_or_else(|| missing("value"))?;
    let difference: Type = difference.unwrap_or_else(|| parse_quote!(isize));
    let pointer: Type = pointer.unwrap_or_else(|| parse_quote!(*const #value));
    let reference: Type = reference.unwrap_or_else(|| parse_quote!(&#reference_lifetime #value));

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::itertag::IteratorTraits for #ident #ty_generics #where_clause {
            type Category = #category;
            type Value = #value;
            type Difference = #difference;
            type Pointer = #pointer;
            type Reference<#reference_lifetime> = #reference
            where
                Self: #reference_lifetime;
        }
    })
}
