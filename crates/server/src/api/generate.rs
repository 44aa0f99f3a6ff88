use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use billet::Invoice;
use uuid::Uuid;

/// Renders the posted invoice and returns the PDF as an attachment.
///
/// The file is written under the configured output directory with a unique
/// name and removed again once its bytes are in the response.
pub async fn generate_invoice(
    State(state): State<AppState>,
    Json(invoice): Json<Invoice>,
) -> Result<impl IntoResponse> {
    let filename = format!("invoice_{}.pdf", Uuid::new_v4());
    let path = state.config.output.dir.join(&filename);
    tracing::info!(
        "Generating invoice '{}' ({} items) as {}",
        invoice.invoice_number,
        invoice.products.len(),
        filename
    );

    let generator = state.generator.clone();
    let render_path = path.clone();
    let summary = tokio::task::spawn_blocking(move || generator.render(&invoice, &render_path))
        .await
        .map_err(|e| ServiceError::Internal(format!("render task failed: {}", e)))??;

    let read = tokio::fs::read(&path).await;
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!("Failed to remove {}: {}", path.display(), e);
    }
    let pdf_bytes = read?;

    if summary.overflowed_rows > 0 {
        tracing::warn!(
            "{}: {} of {} rows fell below the page bottom",
            filename,
            summary.overflowed_rows,
            summary.rows
        );
    }
    tracing::info!("Generated {} ({} bytes)", filename, pdf_bytes.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        pdf_bytes,
    ))
}
