//! Integration tests for http_foundation
//!
//! These tests drive the public API the way a downstream HTTP library
//! would: assembling request holders from parsed wire data and consulting
//! the vocabulary tables when formatting responses.
//!
//! Set RUST_LOG=http_foundation=debug to see construction events.

use http_foundation::request::server_keys;
use http_foundation::{
    parse, path, Error, Method, Params, Request, Response, StatusClass, StatusCode,
};

/// Install a subscriber so RUST_LOG controls test log output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_request_assembly_from_wire_data() {
    init_tracing();

    let mut server = Params::new();
    server.insert(server_keys::REQUEST_METHOD, Method::Post.as_str());
    server.insert(server_keys::REQUEST_URI, "/blog/posts?draft=true");

    let req = Request::builder()
        .query(parse::parse_query_string("draft=true"))
        .request(parse::parse_query_string("title=First%20post&body=hello"))
        .cookies(parse::parse_cookie_header("session=abc123; theme=dark"))
        .server(server)
        .content("title=First%20post&body=hello")
        .build();

    assert_eq!(req.query().get("draft"), Some("true"));
    assert_eq!(req.request().get("title"), Some("First post"));
    assert_eq!(req.request().get("body"), Some("hello"));
    assert_eq!(req.cookies().get("session"), Some("abc123"));
    assert_eq!(req.cookies().get("theme"), Some("dark"));
    assert_eq!(req.server().get(server_keys::REQUEST_METHOD), Some("POST"));
    assert_eq!(req.content(), "title=First%20post&body=hello");
}

#[test]
fn test_mounted_request_resolves_path_info() {
    init_tracing();

    let req = Request::from_target("/mysite", "/mysite/about?var=1");
    assert_eq!(req.path_info(), "/about");
    assert_eq!(req.server().get(server_keys::SCRIPT_NAME), Some("/mysite"));
    assert_eq!(req.server().get(server_keys::PATH_INFO), Some("/about"));
    assert_eq!(req.query().get("var"), Some("1"));

    assert_eq!(path::resolve_path_info("/mysite", "/mysite"), "");
    assert_eq!(
        path::resolve_path_info("/mysite", "/mysite/enco%20ded"),
        "/enco%20ded"
    );
}

#[test]
fn test_method_vocabulary_gates_dispatch() {
    // A request-line parser consults the vocabulary before dispatching
    for line in ["GET /index", "PURGE /cached", "TRACE /debug"] {
        let name = line.split(' ').next().unwrap();
        assert!(Method::is_known(name));
        let method: Method = name.parse().unwrap();
        assert_eq!(method.as_str(), name);
    }

    assert_eq!(
        "brew".parse::<Method>(),
        Err(Error::UnknownMethod("brew".to_string()))
    );
}

#[test]
fn test_status_lines_format_from_registry() {
    let status = StatusCode::from_u16(404).unwrap();
    assert_eq!(format!("HTTP/1.1 {}", status), "HTTP/1.1 404 Not Found");

    let teapot = StatusCode::try_from(418).unwrap();
    assert_eq!(teapot.to_string(), "418 I'm a teapot");
    assert!(teapot.is_client_error());

    assert_eq!(StatusCode::try_from(299), Err(Error::UnknownStatus(299)));
}

#[test]
fn test_error_pages_branch_on_class() {
    // An error-page layer branches on the class, not the code
    let mut error_pages = 0;
    for code in StatusCode::ALL {
        match code.class() {
            StatusClass::ClientError | StatusClass::ServerError => {
                assert!(code.is_error());
                error_pages += 1;
            }
            _ => assert!(!code.is_error()),
        }
    }
    assert_eq!(error_pages, 40);
}

#[test]
fn test_setters_replace_entire_maps() {
    init_tracing();

    let mut req = Request::from_target("/app", "/app/one?x=1");
    assert_eq!(req.query().get("x"), Some("1"));

    req.set_query(parse::parse_query_string("y=2"));
    assert_eq!(req.query().get("x"), None);
    assert_eq!(req.query().get("y"), Some("2"));
}

#[test]
fn test_response_placeholder_composes() {
    struct HtmlResponse {
        base: Response,
        status: StatusCode,
        body: String,
    }

    let page = HtmlResponse {
        base: Response::new(),
        status: StatusCode::Ok,
        body: "<h1>Hi</h1>".to_string(),
    };

    assert_eq!(page.base, Response::default());
    assert_eq!(page.status.to_string(), "200 OK");
    assert!(page.status.is_success());
    assert!(!page.body.is_empty());
}
