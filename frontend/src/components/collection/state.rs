use web_sys::File;

use common::collection::CollectionState;
use common::record::Record;

/// Component state: the pure collection state machine plus the guard
/// that keeps the first-render fetch from running twice.
///
/// Fields are `pub` because they are accessed by the `update` and
/// `view` modules.
pub struct CollectionAdmin<R: Record> {
    pub store: CollectionState<R, File>,
    pub loaded: bool,
}

impl<R: Record> CollectionAdmin<R> {
    pub fn new() -> Self {
        Self {
            store: CollectionState::new(),
            loaded: false,
        }
    }
}
