use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../static/index.html");

/// GET /
/// Static landing page with example prompts and a form for both endpoints.
pub async fn landing_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
