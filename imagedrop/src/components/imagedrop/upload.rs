//! Upload submission and response decoding.
//!
//! One multipart POST per attempt, carrying the anti-forgery token as a
//! request header. The response is reduced to the returned filename on
//! success or to the server's human-readable message on failure; no retry
//! happens at any layer.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

/// Field name the dropped file is appended under in drag-and-drop mode.
pub const FILES_FIELD: &str = "files";

/// Header carrying the anti-forgery token value.
pub const TOKEN_HEADER: &str = "RequestVerificationToken";

/// Success body: the server echoes back the stored filename.
#[derive(Debug, Deserialize)]
pub struct UploadSuccess {
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// Failure body: a human-readable message for the user.
#[derive(Debug, Deserialize)]
pub struct UploadFailure {
    pub message: String,
}

/// Sends the multipart POST to `upload_url`.
pub async fn submit(upload_url: &str, token: &str, form_data: FormData) -> Result<String, String> {
    let request = Request::post(upload_url)
        .header(TOKEN_HEADER, token)
        .body(form_data)
        .map_err(|err| err.to_string())?;

    match request.send().await {
        Ok(response) if response.status() == 200 => response
            .json::<UploadSuccess>()
            .await
            .map(|body| body.file_name)
            .map_err(|err| err.to_string()),
        Ok(response) => {
            let message = match response.json::<UploadFailure>().await {
                Ok(body) => body.message,
                Err(_) => format!("upload failed with status {}", response.status()),
            };
            Err(message)
        }
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_exposes_the_filename() {
        let body: UploadSuccess =
            serde_json::from_str(r#"{"fileName": "photo_123.jpg"}"#).unwrap();
        assert_eq!(body.file_name, "photo_123.jpg");
    }

    #[test]
    fn failure_body_exposes_the_message() {
        let body: UploadFailure =
            serde_json::from_str(r#"{"message": "duplicate filename"}"#).unwrap();
        assert_eq!(body.message, "duplicate filename");
    }

    #[test]
    fn success_body_without_filename_is_rejected() {
        assert!(serde_json::from_str::<UploadSuccess>(r#"{"message": "x"}"#).is_err());
    }
}
