// src/middleware/method_override.rs
//
// HTML forms can only submit GET and POST. A POST carrying `_method=PUT`
// (or PATCH/DELETE) in its query string is rewritten to that method before
// routing, so the edit form can drive the PUT route.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};

pub async fn rewrite(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        if let Some(method) = req.uri().query().and_then(override_from_query) {
            tracing::debug!("method override: POST -> {method}");
            *req.method_mut() = method;
        }
    }
    next.run(req).await
}

fn override_from_query(query: &str) -> Option<Method> {
    let value = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("_method="))?;

    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::put, Router};
    use tower::{Layer, ServiceExt};

    #[test]
    fn recognizes_overridable_methods() {
        assert_eq!(override_from_query("_method=PUT"), Some(Method::PUT));
        assert_eq!(override_from_query("_method=put"), Some(Method::PUT));
        assert_eq!(override_from_query("_method=DELETE"), Some(Method::DELETE));
        assert_eq!(override_from_query("a=1&_method=PATCH"), Some(Method::PATCH));
    }

    #[test]
    fn ignores_everything_else() {
        assert_eq!(override_from_query(""), None);
        assert_eq!(override_from_query("method=PUT"), None);
        assert_eq!(override_from_query("_method=GET"), None);
        assert_eq!(override_from_query("_method=TRACE"), None);
    }

    #[tokio::test]
    async fn post_with_override_reaches_the_put_route() {
        let router = Router::new().route("/things/{id}", put(|| async { "ok" }));
        let app = axum::middleware::from_fn(rewrite).layer(router);

        let req = Request::builder()
            .method(Method::POST)
            .uri("/things/7?_method=PUT")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn plain_post_is_left_untouched() {
        let router = Router::new().route("/things/{id}", put(|| async { "ok" }));
        let app = axum::middleware::from_fn(rewrite).layer(router);

        let req = Request::builder()
            .method(Method::POST)
            .uri("/things/7")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
