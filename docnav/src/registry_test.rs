use super::*;

// =============================================================
// Builder
// =============================================================

#[test]
fn new_registry_is_empty() {
    let registry = DocumentRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert_eq!(registry.get("intro"), None);
}

#[test]
fn with_document_stores_fragment_verbatim() {
    let registry = DocumentRegistry::new().with_document("api", "<pre>GET /api/projects</pre>");
    assert_eq!(registry.get("api"), Some("<pre>GET /api/projects</pre>"));
    assert!(!registry.is_empty());
}

#[test]
fn with_document_last_write_wins() {
    let registry = DocumentRegistry::new()
        .with_document("intro", "<h1>old</h1>")
        .with_document("intro", "<h1>new</h1>");
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("intro"), Some("<h1>new</h1>"));
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_known_key_returns_fragment() {
    let registry = DocumentRegistry::new().with_document("setup", "<h1>Configuración</h1>");
    assert_eq!(registry.resolve(Some("setup")), "<h1>Configuración</h1>");
}

#[test]
fn resolve_unknown_key_returns_not_found() {
    let registry = DocumentRegistry::new().with_document("setup", "<h1>Configuración</h1>");
    assert_eq!(registry.resolve(Some("missing")), NOT_FOUND_FRAGMENT);
}

#[test]
fn resolve_missing_key_returns_not_found() {
    let registry = DocumentRegistry::new().with_document("setup", "<h1>Configuración</h1>");
    assert_eq!(registry.resolve(None), NOT_FOUND_FRAGMENT);
}

#[test]
fn resolve_on_empty_registry_returns_not_found() {
    assert_eq!(DocumentRegistry::new().resolve(Some("intro")), NOT_FOUND_FRAGMENT);
}

#[test]
fn resolve_is_case_sensitive() {
    let registry = DocumentRegistry::new().with_document("api", "<h1>API Reference</h1>");
    assert_eq!(registry.resolve(Some("API")), NOT_FOUND_FRAGMENT);
}

#[test]
fn not_found_fragment_is_spanish_heading() {
    assert_eq!(NOT_FOUND_FRAGMENT, "<h1>Documento no encontrado</h1>");
}
