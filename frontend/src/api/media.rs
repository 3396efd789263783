//! Upload adapter for the external asset host.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

use common::model::field::MediaKind;
use common::remote::{FileUpload, RemoteError, UploadResult};

/// Unsigned upload target; the host answers with a JSON body carrying
/// the stable URL under `secure_url`.
const UPLOAD_ENDPOINT: &str = "https://api.cloudinary.com/v1_1/meridian-impex/auto/upload";
const UPLOAD_PRESET: &str = "meridian_unsigned";

const UPLOAD_FALLBACK: &str = "File upload failed, please try again.";

#[derive(Clone)]
pub struct MediaUploader {
    endpoint: String,
    preset: String,
}

impl Default for MediaUploader {
    fn default() -> Self {
        Self {
            endpoint: UPLOAD_ENDPOINT.to_string(),
            preset: UPLOAD_PRESET.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct UploadBody {
    secure_url: String,
}

impl FileUpload for MediaUploader {
    type Source = File;

    /// One multipart POST per file. The host does not deduplicate
    /// repeated uploads, so nothing here retries.
    async fn upload(&self, source: &File, kind: MediaKind) -> Result<UploadResult, RemoteError> {
        let form = FormData::new().map_err(|_| unreachable_form())?;
        form.append_with_blob("file", source)
            .map_err(|_| unreachable_form())?;
        form.append_with_str("upload_preset", &self.preset)
            .map_err(|_| unreachable_form())?;

        let response = Request::post(&self.endpoint)
            .body(form)
            .map_err(asset_host_offline)?
            .send()
            .await
            .map_err(asset_host_offline)?;

        if !response.ok() {
            return Err(RemoteError::Server(UPLOAD_FALLBACK.to_string()));
        }
        let body: UploadBody = response
            .json()
            .await
            .map_err(|_| RemoteError::Server(UPLOAD_FALLBACK.to_string()))?;
        Ok(UploadResult {
            url: body.secure_url,
            kind,
        })
    }
}

fn asset_host_offline(err: gloo_net::Error) -> RemoteError {
    RemoteError::Network(format!("Could not reach the asset host: {err}"))
}

fn unreachable_form() -> RemoteError {
    RemoteError::Network("Upload could not be prepared.".to_string())
}
