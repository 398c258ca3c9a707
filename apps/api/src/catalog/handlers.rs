use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, TemplateDescriptor};
use crate::document::ResumeDocument;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// A catalog entry as the gallery sees it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateView {
    #[serde(flatten)]
    pub template: TemplateDescriptor,
    pub arrangement: u8,
    pub arrangement_name: &'static str,
}

impl From<&TemplateDescriptor> for TemplateView {
    fn from(template: &TemplateDescriptor) -> Self {
        let arrangement = template.arrangement();
        TemplateView {
            template: template.clone(),
            arrangement: arrangement.number(),
            arrangement_name: arrangement.name(),
        }
    }
}

pub(crate) fn lookup(id: u32) -> Result<&'static TemplateDescriptor, AppError> {
    Catalog::get(id).ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}

/// GET /api/v1/templates
pub async fn handle_list_templates(Query(params): Query<CategoryQuery>) -> Json<Vec<TemplateView>> {
    let templates = Catalog::filter(params.category.as_deref());
    Json(templates.into_iter().map(TemplateView::from).collect())
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(Path(id): Path<u32>) -> Result<Json<TemplateView>, AppError> {
    Ok(Json(TemplateView::from(lookup(id)?)))
}

/// GET /api/v1/categories
pub async fn handle_list_categories() -> Json<Vec<&'static str>> {
    Json(Catalog::categories())
}

/// GET /api/v1/templates/:id/preview
/// Gallery thumbnail: the arrangement rendered with placeholder content.
pub async fn handle_template_preview(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, AppError> {
    let template = lookup(id)?;
    let surface = template.arrangement().render(
        &ResumeDocument::placeholder(),
        template.accent(),
        &state.page,
    );
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], surface.to_svg()))
}
