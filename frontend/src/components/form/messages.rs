use serde_json::Value;
use web_sys::File;

use common::model::field::FieldValue;
use common::remote::RemoteError;

pub enum Msg {
    FieldChanged(&'static str, FieldValue),
    FileAttached(&'static str, File),
    Submit,
    Submitted(Result<Value, RemoteError>),
    NoticeExpired(u32),
    DismissNotice,
}
