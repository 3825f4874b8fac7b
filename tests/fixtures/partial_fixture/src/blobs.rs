//! A model holding values that stay on one thread.

use std::rc::Rc;

/// A view into bytes owned elsewhere.
///
/// codegen-partial:builder,matcher
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Start of the viewed bytes.
    pub data: Option<*const u8>,
    /// Shared owner of the bytes.
    pub owner: Rc<u8>,
}

include!("blobs.partialgen.rs");
