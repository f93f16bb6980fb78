use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub(crate) mod filters {
    /// Resolve a static asset path, honoring the configured base path.
    #[askama::filter_fn]
    pub fn assets(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let base_path = askama::get_value::<String>(values, "base_path")
            .expect("Unable to get base_path from askama::get_value");

        Ok(format!("{base_path}/static/{value}"))
    }

    /// Resolve an application link, honoring the configured base path.
    #[askama::filter_fn]
    pub fn href(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let base_path = askama::get_value::<String>(values, "base_path")
            .expect("Unable to get base_path from askama::get_value");

        Ok(format!("{base_path}{value}"))
    }
}

pub struct Template {
    base_path: String,
}

impl Template {
    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("base_path", Box::new(self.base_path.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            base_path: state.config.site.base_path.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
