use axum::{body::Body, http::StatusCode, response::Response};

/// Asserts that `response` is a 200 HTML page rendered by maud.
#[track_caller]
pub(crate) fn assert_html_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(get_header(response, "content-type"), "text/html; charset=utf-8");
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    response
        .headers()
        .get(header_name)
        .unwrap_or_else(|| panic!("Headers missing {header_name}"))
        .to_str()
        .expect("Could not convert to str")
        .to_owned()
}
