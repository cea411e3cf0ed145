use bocadillo_cli::{
    constants::{META_FILES, PACKAGE_FILES, VERSION},
    context::{Context, ProjectName},
    error::Error,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    templates::{get_template, Templates, BUNDLED},
};

fn context() -> Context {
    Context::new(&ProjectName::new("demo-app").unwrap())
}

#[test]
fn test_every_manifest_file_is_bundled() {
    for name in META_FILES.iter().chain(PACKAGE_FILES.iter()) {
        assert!(get_template(name).is_ok(), "missing template for {name}");
    }
    assert_eq!(BUNDLED.len(), META_FILES.len() + PACKAGE_FILES.len());
}

#[test]
fn test_missing_template() {
    match get_template("manage.py") {
        Err(Error::TemplateNotFoundError { name }) => assert_eq!(name, "manage.py.jinja"),
        other => panic!("Expected TemplateNotFoundError, got {other:?}"),
    }
}

#[test]
fn test_render_substitutes_context() {
    let engine = MiniJinjaRenderer::new();
    let context = context();
    let templates = Templates::new(&engine, &context);

    for (name, _) in BUNDLED {
        let rendered = templates.render(name).unwrap();
        assert!(!rendered.contains("{{"), "unrendered placeholder in {name}");
        assert!(rendered.contains("demo-app"), "name missing from {name}");
        assert!(rendered.contains("demo_app"), "package missing from {name}");
        assert!(rendered.contains(VERSION), "version missing from {name}");
        assert!(!rendered.ends_with('\n'), "trailing newline kept in {name}");
    }

    let readme = templates.render("README.md").unwrap();
    assert!(readme.starts_with("# demo-app"));
    assert!(readme.contains("uvicorn demo_app.asgi:app"));
}

#[test]
fn test_render_missing_template() {
    let engine = MiniJinjaRenderer::new();
    let context = context();
    let templates = Templates::new(&engine, &context);

    assert!(matches!(
        templates.render("missing"),
        Err(Error::TemplateNotFoundError { .. })
    ));
}

#[test]
fn test_minijinja_renderer() {
    let engine = MiniJinjaRenderer::new();
    let context = serde_json::json!({
        "name": "demo-app",
        "items": ["a", "b"]
    });

    let result = engine.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello demo-app!");

    let result = engine
        .render("{% for item in items %}{{ item }}{% endfor %}", &context)
        .unwrap();
    assert_eq!(result, "ab");

    let result = engine.render("{% if missing %}yes{% else %}no{% endif %}", &context).unwrap();
    assert_eq!(result, "no");
}
