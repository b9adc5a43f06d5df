//! Browser-facing handlers. Each action updates the view state, starts its
//! backend call in the background and redirects back to the page at once.
//! The page keeps polling until the call lands.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::client::Tab;
use crate::errors::AppError;
use crate::insight_api::UploadFile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ViewForm {
    pub id: String,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(state.client.render_page().await)
}

/// POST /tabs/:tab
pub async fn handle_select_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Redirect, AppError> {
    let tab: Tab = tab.parse().map_err(AppError::NotFound)?;
    let _refresh = state.client.select_tab(tab).await;
    Ok(Redirect::to("/"))
}

/// POST /upload
///
/// An unreadable form body is rendered as an upload error like any other.
pub async fn handle_upload(State(state): State<AppState>, multipart: Multipart) -> Redirect {
    match read_upload(multipart).await {
        Ok(file) => {
            let _upload = state.client.submit(file).await;
        }
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            state
                .client
                .reject_upload("File exceeds the upload size limit")
                .await
        }
        Err(e) => state.client.reject_upload(&e.body_text()).await,
    }
    Redirect::to("/")
}

/// Reads the `file` field. A form submitted with no file selected carries an
/// empty filename and body, which is treated as no file at all.
async fn read_upload(mut multipart: Multipart) -> Result<Option<UploadFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        if filename.is_empty() {
            return Ok(None);
        }
        return Ok(Some(UploadFile {
            filename,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

/// POST /history/refresh
pub async fn handle_refresh_history(State(state): State<AppState>) -> Redirect {
    let _refresh = state.client.load_history().await;
    Redirect::to("/")
}

/// POST /history/view
pub async fn handle_view(State(state): State<AppState>, Form(form): Form<ViewForm>) -> Redirect {
    let _lookup = state.client.view(&form.id).await;
    Redirect::to("/")
}
