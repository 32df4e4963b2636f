// --------------------------------------------------
// Bootstrap page and static assets, embedded in the binary.
// --------------------------------------------------

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const INDEX_HTML: &[u8] = include_bytes!("../static/index.html");

// (path under /static/, contents)
const ASSETS: &[(&str, &[u8])] = &[
    ("index.html", INDEX_HTML),
    ("style.css", include_bytes!("../static/style.css")),
    ("app.js", include_bytes!("../static/app.js")),
];

pub fn asset(path: &str) -> Option<&'static [u8]> {
    ASSETS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, data)| *data)
}

/// Content type by extension. `None` means no header is set.
pub fn content_type(path: &str) -> Option<&'static str> {
    if path.ends_with(".css") {
        Some("text/css")
    } else if path.ends_with(".js") {
        Some("application/javascript")
    } else {
        None
    }
}

// -----------------------------
// GET /
// -----------------------------
pub async fn index() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html")], INDEX_HTML)
}

// -----------------------------
// GET /static/*path
// -----------------------------
pub async fn static_file(Path(path): Path<String>) -> Response {
    let Some(data) = asset(&path) else {
        tracing::debug!(%path, "static asset not found");
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(ct) = content_type(&path) {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    builder
        .body(Body::from(data))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_assets_are_embedded() {
        assert!(asset("style.css").is_some());
        assert!(asset("app.js").is_some());
        assert!(asset("nope.css").is_none());
        assert!(asset("../Cargo.toml").is_none());
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type("style.css"), Some("text/css"));
        assert_eq!(content_type("app.js"), Some("application/javascript"));
        assert_eq!(content_type("index.html"), None);
    }

    #[test]
    fn index_has_title() {
        let html = std::str::from_utf8(INDEX_HTML).unwrap();
        assert!(html.contains("<title>TODO List</title>"));
    }
}
