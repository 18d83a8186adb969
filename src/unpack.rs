//! Seam for the transport envelope around the raster.
//!
//! Maps arrive encrypted and compressed. Decrypting them needs device
//! identifiers this crate never sees, so the caller supplies the unpacking
//! step and its failures surface as [`MapError::Unpack`], apart from parse
//! errors in the payload itself.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::Display;

use crate::error::MapError;

/// Turns a transport envelope into raw map bytes.
pub trait Unpacker {
    type Error: Display;

    fn unpack(&self, envelope: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl<F, E> Unpacker for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, E>,
    E: Display,
{
    type Error = E;

    fn unpack(&self, envelope: &[u8]) -> Result<Vec<u8>, E> {
        self(envelope)
    }
}

/// Run `unpacker` over `envelope`.
pub fn unpack_map<U: Unpacker + ?Sized>(unpacker: &U, envelope: &[u8]) -> Result<Vec<u8>, MapError> {
    unpacker
        .unpack(envelope)
        .map_err(|e| MapError::Unpack(e.to_string()))
}
