use web_sys::File;

use common::form::FormState;

/// Component state; the pure form state machine does the work.
pub struct SubmitForm {
    pub state: FormState<File>,
}

impl SubmitForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
        }
    }
}
