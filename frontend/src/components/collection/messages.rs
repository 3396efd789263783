use web_sys::File;

use common::collection::SubmitOutcome;
use common::model::field::FieldValue;
use common::remote::RemoteError;

pub enum Msg<R> {
    Loaded(Result<Vec<R>, RemoteError>),
    BeginCreate,
    BeginEdit(String),
    FieldChanged(&'static str, FieldValue),
    FileAttached(&'static str, File),
    CancelEdit,
    Submit,
    Submitted(SubmitOutcome<R>),
    RequestDelete(String),
    AbortDelete,
    ConfirmDelete,
    Deleted(String, Result<(), RemoteError>),
    NoticeExpired(u32),
    DismissNotice,
}
