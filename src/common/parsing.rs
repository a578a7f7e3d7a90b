//! Field mappers shared by the marker records: one-byte booleans and u16-prefixed UTF-8 strings.

use std::num::TryFromIntError;

pub(crate) fn read_bool_from<T: std::convert::From<u8> + std::cmp::PartialEq>(x: T) -> bool {
    x == T::from(1u8)
}

pub(crate) fn write_bool_as<T: std::convert::From<u8>>(x: &bool) -> T {
    if *x { T::from(1u8) } else { T::from(0u8) }
}

/// Strings are prefixed by their length in bytes, which has to fit into a `u16`.
pub(crate) fn utf_length(str: &str) -> Result<u16, TryFromIntError> {
    u16::try_from(str.len())
}

pub(crate) fn write_utf(str: &String) -> Vec<u8> {
    str.as_bytes().to_vec()
}
