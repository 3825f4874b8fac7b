//! Generated helpers for fields that are neither `Send` nor `Sync`.

use std::rc::Rc;

use partial_fixture::{Blob, BlobBuilder, BlobMatcher};
use rstest::rstest;

static BYTES: [u8; 4] = *b"blob";

#[rstest]
fn builder_accepts_raw_pointers_and_rc() {
    let owner = Rc::new(7);
    let built = BlobBuilder::build([
        BlobBuilder::data(Some(BYTES.as_ptr())),
        BlobBuilder::owner(Rc::clone(&owner)),
    ]);

    assert_eq!(built.field_names(), ["data", "owner"]);
    assert_eq!(built.subject().data, Some(BYTES.as_ptr()));

    let patched = built.apply(Blob::default());
    assert!(Rc::ptr_eq(&patched.owner, &owner));
}

#[rstest]
fn matcher_checks_raw_pointers_and_rc() {
    let blob = Blob {
        data: Some(BYTES.as_ptr()),
        owner: Rc::new(7),
    };
    let matcher = Blob::matcher([
        BlobMatcher::data(Some(BYTES.as_ptr())),
        BlobMatcher::match_owner(|owner| **owner == 7),
    ]);
    matcher.assert_matches(&blob);

    let empty = BlobMatcher::build([BlobMatcher::data(None)]);
    assert!(!empty.matches(&blob));
}
