//! Request handlers for the web form.

use std::io::Write;
use std::path::Path;

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use vitae::Report;

use super::error::ApiError;
use super::state::AppState;

/// The upload form. One embedded page keeps the surface thin: all logic
/// stays in the library, the browser just posts multipart data.
const FORM_HTML: &str = include_str!("form.html");

/// GET / - serve the upload form.
pub async fn index() -> Html<&'static str> {
    Html(FORM_HTML)
}

/// POST /api/analyze - run the pipeline on an uploaded résumé.
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Report>, ApiError> {
    let mut resume: Option<(String, Vec<u8>)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart data: {}", e)))?
    {
        match field.name() {
            Some("resume") => {
                let file_name = field
                    .file_name()
                    .ok_or_else(|| ApiError::BadRequest("resume field has no filename".into()))?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("unreadable upload: {}", e)))?;
                resume = Some((file_name, bytes.to_vec()));
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("unreadable field: {}", e)))?;
                job_description = Some(text);
            }
            _ => continue,
        }
    }

    let (file_name, bytes) =
        resume.ok_or_else(|| ApiError::BadRequest("missing 'resume' file field".into()))?;
    let jd_text = job_description
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing or empty 'job_description' field".into()))?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("uploaded résumé is empty".into()));
    }

    // The extractor dispatches on extension, so the temp file must carry
    // the upload's original one.
    let suffix = Path::new(&file_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let analyzer = state.analyzer.clone();
    let report = tokio::task::spawn_blocking(move || -> Result<Report, vitae::VitaeError> {
        let mut tmp = tempfile::Builder::new()
            .prefix("vitae-upload-")
            .suffix(&suffix)
            .tempfile()
            .map_err(|e| vitae::VitaeError::Io {
                path: std::env::temp_dir(),
                source: e,
            })?;
        tmp.write_all(&bytes).map_err(|e| vitae::VitaeError::Io {
            path: tmp.path().to_path_buf(),
            source: e,
        })?;

        let analysis = analyzer.analyze_file(tmp.path(), &jd_text)?;
        Ok(analysis.report)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))??;

    Ok(Json(report))
}
