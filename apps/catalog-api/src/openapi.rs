//! OpenAPI documentation configuration

use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Read-only product catalog with category management"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    modifiers(&DomainDocs)
)]
pub struct ApiDoc;

/// Pulls in the paths, schemas and tags each domain documents for itself.
struct DomainDocs;

impl Modify for DomainDocs {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_products::handlers::ApiDoc::openapi());
        openapi.merge(domain_categories::handlers::ApiDoc::openapi());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/catalog"), "{paths:?}");
        assert!(paths.contains(&"/catalog/{code}"), "{paths:?}");
        assert!(paths.contains(&"/categories"), "{paths:?}");
        assert_eq!(doc.info.title, "Catalog API");
    }

    #[test]
    fn test_document_carries_domain_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        for name in ["Product", "Variant", "Category", "CreateCategory", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
