//! Common parsing utilities
//!
//! Shared parsing helpers for `#[name(key = Type, ...)]` attributes.

use syn::{Attribute, Type, meta::ParseNestedMeta};

// =============================================================================
// Key-Value Attribute Parsing
// =============================================================================

/// A `key = Type` slot that may be given at most once.
pub struct TypeSlot {
    pub key: &'static str,
    pub value: Option<Type>,
}

impl TypeSlot {
    pub const fn new(key: &'static str) -> Self {
        Self { key, value: None }
    }
}

/// Parse every `#[name(...)]` attribute into the given slots.
///
/// Unknown keys and repeated keys are reported at their span.
pub fn parse_type_slots(
    attrs: &[Attribute],
    name: &str,
    slots: &mut [TypeSlot],
) -> syn::Result<()> {
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        attr.parse_nested_meta(|meta| fill_slot(&meta, slots))?;
    }
    Ok(())
}

fn fill_slot(meta: &ParseNestedMeta<'_>, slots: &mut [TypeSlot]) -> syn::Result<()> {
    let Some(slot) = slots.iter_mut().find(|s| meta.path.is_ident(s.key)) else {
        let known: Vec<&str> = slots.iter().map(|s| s.key).collect();
        return Err(meta.error(format!("unknown key, expected one of: {}", known.join(", "))));
    };
    if slot.value.is_some() {
        return Err(meta.error(format!("duplicate `{}`", slot.key)));
    }
    slot.value = Some(meta.value()?.parse()?);
    Ok(())
}
