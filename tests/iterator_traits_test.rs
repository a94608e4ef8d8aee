//! Trait extraction: declared descriptors and the raw-address rules.

mod common;

use common::assert_type_eq;
use itertag::cursor::{Cursor, Restrict};
use itertag::{
    Bidirectional, CategoryOf, DifferenceOf, Forward, Input, IteratorTraits, PointerOf,
    RandomAccess, ReferenceOf, ValueOf,
};

// =============================================================================
// Raw addresses
// =============================================================================

#[test]
fn test_mut_pointer_descriptor() {
    assert_type_eq::<CategoryOf<*mut i32>, RandomAccess>();
    assert_type_eq::<ValueOf<*mut i32>, i32>();
    assert_type_eq::<DifferenceOf<*mut i32>, isize>();
    assert_type_eq::<PointerOf<*mut i32>, *mut i32>();
    assert_type_eq::<ReferenceOf<'static, *mut i32>, &'static mut i32>();
}

#[test]
fn test_const_pointer_descriptor() {
    assert_type_eq::<CategoryOf<*const i32>, RandomAccess>();
    // Value stays unqualified; only access types carry constness.
    assert_type_eq::<ValueOf<*const i32>, i32>();
    assert_type_eq::<DifferenceOf<*const i32>, isize>();
    assert_type_eq::<PointerOf<*const i32>, *const i32>();
    assert_type_eq::<ReferenceOf<'static, *const i32>, &'static i32>();
}

#[test]
fn test_pointer_to_compound_value() {
    assert_type_eq::<ValueOf<*const [u8; 4]>, [u8; 4]>();
    assert_type_eq::<ValueOf<*mut String>, String>();
    assert_type_eq::<ReferenceOf<'static, *mut String>, &'static mut String>();
}

// =============================================================================
// Declared descriptors
// =============================================================================

struct Lines;

impl IteratorTraits for Lines {
    type Category = Input;
    type Value = String;
    type Difference = i64;
    type Pointer = *const String;
    type Reference<'a> = &'a str;
}

#[test]
fn test_declared_descriptor_is_read_off() {
    assert_type_eq::<CategoryOf<Lines>, Input>();
    assert_type_eq::<ValueOf<Lines>, String>();
    assert_type_eq::<DifferenceOf<Lines>, i64>();
    assert_type_eq::<PointerOf<Lines>, *const String>();
    assert_type_eq::<ReferenceOf<'static, Lines>, &'static str>();
}

#[test]
fn test_cursor_descriptor() {
    type C<'a> = Cursor<'a, u16>;
    assert_type_eq::<CategoryOf<C<'static>>, RandomAccess>();
    assert_type_eq::<ValueOf<C<'static>>, u16>();
    assert_type_eq::<PointerOf<C<'static>>, *const u16>();
    assert_type_eq::<ReferenceOf<'static, C<'static>>, &'static u16>();
}

#[test]
fn test_restrict_only_changes_category() {
    type R = Restrict<*const u8, Bidirectional>;
    assert_type_eq::<CategoryOf<R>, Bidirectional>();
    assert_type_eq::<ValueOf<R>, u8>();
    assert_type_eq::<DifferenceOf<R>, isize>();
    assert_type_eq::<PointerOf<R>, *const u8>();
    assert_type_eq::<ReferenceOf<'static, R>, &'static u8>();

    type F = Restrict<Cursor<'static, u8>, Forward>;
    assert_type_eq::<CategoryOf<F>, Forward>();
}
