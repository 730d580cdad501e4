//! Integration tests for scaffold generation

use std::fs;

use htmx_scaffold::templates::{DEFAULT_MARKUP, STYLESHEET};
use htmx_scaffold::{BackendGenerator, BackendKind, HttpMethod, ScaffoldError, SiteScaffold};
use tempfile::TempDir;

const TWO_BUTTON_MARKUP: &str = r#"
<!DOCTYPE html>
<html>
<body>
<button hx-get="/get_example">GET example</button>
<button hx-post="/post_example">POST example</button>
</body>
</html>
"#;

/// Flask render of the two-button document: one handler per button, plus
/// the static-file route and the startup invocation.
#[test]
fn test_flask_two_button_scenario() {
    let generator =
        BackendGenerator::new("flask", Some(TWO_BUTTON_MARKUP.to_string())).unwrap();
    let source = generator.generate().unwrap();

    assert!(source.contains("@app.route('/get_example', methods=['GET'])"));
    assert!(source.contains(r#"return "GET request received""#));
    assert!(source.contains("@app.route('/post_example', methods=['POST'])"));
    assert!(source.contains(r#"return "POST request received""#));
    assert!(source.contains("@app.route('/static/<path:filename>')"));
    assert!(source.contains("app.run(debug=True)"));
}

/// Requesting an unsupported backend must fail at configuration time.
#[test]
fn test_unsupported_backend_fails_immediately() {
    let err = BackendGenerator::new("cobol", None).unwrap_err();
    assert!(matches!(&err, ScaffoldError::UnsupportedBackend(id) if id == "cobol"));
    assert_eq!(err.to_string(), "Unsupported backend type: cobol");

    assert!(SiteScaffold::new("cobol", None).is_err());
}

/// Every backend renders non-empty preamble+trailer for an empty document.
#[test]
fn test_empty_document_renders_bootstrap_only() {
    for kind in BackendKind::ALL {
        let generator = BackendGenerator::new(
            kind.identifier(),
            Some("<html><body></body></html>".to_string()),
        )
        .unwrap();

        assert!(generator.routes().is_empty());

        let source = generator.generate().unwrap();
        assert!(
            !source.trim().is_empty(),
            "{kind} must still emit its bootstrap"
        );
        assert!(!source.contains("request received"));
    }
}

/// Rendering the same markup twice produces byte-identical output.
#[test]
fn test_generation_is_deterministic() {
    for kind in BackendKind::ALL {
        let first = BackendGenerator::new(kind.identifier(), None)
            .unwrap()
            .generate()
            .unwrap();
        let second = BackendGenerator::new(kind.identifier(), None)
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(first, second, "{kind} output must be stable");
    }
}

/// Multi-attribute elements resolve to a single GET route.
#[test]
fn test_precedence_reaches_generated_source() {
    let markup = r#"<button hx-post="/p" hx-get="/g">X</button>"#.to_string();
    let generator = BackendGenerator::new("flask", Some(markup)).unwrap();

    let routes = generator.routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].method, HttpMethod::Get);

    let source = generator.generate().unwrap();
    assert!(source.contains("methods=['GET']"));
    assert!(!source.contains("methods=['POST']"));
}

/// The scaffold file set written to disk, as the scaffold command writes it.
#[test]
fn test_scaffold_files_written_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let scaffold = SiteScaffold::new("gin", None).unwrap();

    for file in scaffold.generate().unwrap() {
        let path = temp_dir.path().join(&file.path);
        fs::write(&path, &file.content).unwrap();
    }

    let css = fs::read_to_string(temp_dir.path().join("styles.css")).unwrap();
    assert_eq!(css, STYLESHEET);

    let html = fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert_eq!(html, DEFAULT_MARKUP);

    let go = fs::read_to_string(temp_dir.path().join("main.go")).unwrap();
    assert!(go.contains("package main"));
    assert!(go.contains(r#"r.GET("/get_example""#));
    assert!(go.contains(r#"r.POST("/post_example""#));
    assert!(go.contains("r.Run()"));
}

/// The built-in sample document exercises the scanner out of the box.
#[test]
fn test_default_markup_contents() {
    assert!(DEFAULT_MARKUP.contains("<!DOCTYPE html>"));
    assert!(DEFAULT_MARKUP.contains(r#"hx-get="/get_example""#));
    assert!(DEFAULT_MARKUP.contains(r#"hx-post="/post_example""#));
    assert!(DEFAULT_MARKUP.contains(r#"href="styles.css""#));
}

/// The stylesheet matches the fixed site look.
#[test]
fn test_stylesheet_contents() {
    assert!(STYLESHEET.contains("background-color: linen;"));
    assert!(STYLESHEET.contains("button {"));
    assert!(STYLESHEET.contains("cursor: pointer;"));
}

/// N single-attribute elements produce N routes in document order.
#[test]
fn test_route_count_matches_element_count() {
    let markup = r#"
        <button hx-get="/a">a</button>
        <button hx-post="/b">b</button>
        <button hx-put="/c">c</button>
        <button hx-delete="/d">d</button>
    "#
    .to_string();
    let generator = BackendGenerator::new("php-slim", Some(markup)).unwrap();

    let routes = generator.routes();
    assert_eq!(routes.len(), 4);
    let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/a", "/b", "/c", "/d"]);

    let source = generator.generate().unwrap();
    for needle in [
        "$app->get('/a'",
        "$app->post('/b'",
        "$app->put('/c'",
        "$app->delete('/d'",
    ] {
        assert!(source.contains(needle), "missing {needle}");
    }
}
