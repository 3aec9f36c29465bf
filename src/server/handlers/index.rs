// src/server/handlers/index.rs
//! Root listing page

use crate::catalog::Recipe;
use crate::server::SharedState;
use axum::{extract::State, response::Html};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// GET /
///
/// HTML page listing every recipe in insertion order.
pub async fn root(State(state): State<SharedState>) -> Html<String> {
    let state = state.read().await;
    Html(render_listing(state.store.all()))
}

/// Render the listing page for the given recipes
pub fn render_listing(recipes: &[Recipe]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>Recipes</title>\n</head>\n<body>\n\
         <h1>Recipes</h1>\n",
    );

    if recipes.is_empty() {
        page.push_str("<p>No recipes yet.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for recipe in recipes {
            page.push_str(&format!(
                "<li id=\"recipe-{}\"><a href=\"{}\">{}</a> <small>{}</small></li>\n",
                recipe.id,
                encode_double_quoted_attribute(&recipe.url),
                encode_text(&recipe.label),
                encode_text(&recipe.source),
            ));
        }
        page.push_str("</ul>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}
