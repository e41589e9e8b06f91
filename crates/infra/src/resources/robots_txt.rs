use webflow_domain::{
    Encoding, Endpoint, Endpoints, FieldKind, FieldSpec, HttpMethod, IdShape, ReadMode,
    ResourceDescriptor,
};

use super::SITE_ID;

/// The site's robots.txt. Users write plain robots.txt text; the API speaks
/// `{rules, sitemap}`.
pub static ROBOTS_TXT: ResourceDescriptor = ResourceDescriptor {
    name: "RobotsTxt",
    description: "The robots.txt configuration of a site.",
    id_shape: IdShape::singleton("robots.txt", 1),
    scope_fields: &["siteId"],
    native_id_key: "",
    fields: &[
        SITE_ID,
        FieldSpec::new("content", FieldKind::String)
            .required()
            .encoding(Encoding::RobotsTxt)
            .describe("robots.txt content with User-agent, Allow, Disallow and Sitemap directives"),
    ],
    outputs: &[],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Put, "/v2/sites/{siteId}/robots_txt"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/robots_txt"),
        read_mode: ReadMode::Get,
        update: Some(Endpoint::new(HttpMethod::Put, "/v2/sites/{siteId}/robots_txt")),
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/sites/{siteId}/robots_txt")),
    },
};
