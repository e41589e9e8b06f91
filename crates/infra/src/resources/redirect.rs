use webflow_domain::{
    Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, ReadMode,
    ResourceDescriptor,
};

use super::SITE_ID;

/// 301/302 redirect. The API rejects PATCH on redirects, so every change
/// replaces the rule.
pub static REDIRECT: ResourceDescriptor = ResourceDescriptor {
    name: "Redirect",
    description: "A URL redirect rule on a site.",
    id_shape: IdShape::scoped("redirects", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("sourcePath", FieldKind::String)
            .required()
            .replace()
            .key("fromUrl")
            .rule(FieldRule::UrlPath)
            .describe("Path that is redirected, e.g. /old-page"),
        FieldSpec::new("destinationPath", FieldKind::String)
            .required()
            .replace()
            .key("toUrl")
            .rule(FieldRule::UrlPath)
            .describe("Path visitors are sent to, e.g. /new-page"),
        FieldSpec::new("statusCode", FieldKind::Integer)
            .required()
            .replace()
            .rule(FieldRule::IntegerOneOf(&[301, 302]))
            .describe("301 for permanent, 302 for temporary"),
    ],
    outputs: &[],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/redirects"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/redirects"),
        read_mode: ReadMode::FindInList { list_key: "redirects" },
        update: None,
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/sites/{siteId}/redirects/{id}")),
    },
};
