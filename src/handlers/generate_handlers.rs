use actix_web::{HttpResponse, web};

use crate::clients::DashScopeClient;
use crate::error::{AppError, AppResult};
use crate::models::{GenerateTitlesRequest, GenerateTitlesResponse};
use crate::services::prompt_builder::{TitleStyle, build_prompt};
use crate::services::title_extractor::extract_titles;

/// Validate the topic, build the styled prompt, call the generation API and
/// return the cleaned-up title list. An empty list is a success, not an
/// error.
pub async fn generate_titles(
    client: web::Data<DashScopeClient>,
    request: web::Json<GenerateTitlesRequest>,
) -> AppResult<HttpResponse> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation("主题不能为空".to_string()));
    }

    let style = request
        .style
        .as_deref()
        .map(TitleStyle::from_key)
        .unwrap_or_default();
    let prompt = build_prompt(topic, style);

    log::info!("Selected style: {}", style.key());
    log::debug!("Final prompt: {}", prompt);

    let raw_text = client.generate(&prompt).await?;
    let titles = extract_titles(&raw_text);

    Ok(HttpResponse::Ok().json(GenerateTitlesResponse { titles }))
}
