use webflow_domain::{
    Endpoint, Endpoints, HttpMethod, IdShape, OutputSpec, ReadMode, ResourceDescriptor,
};

use super::SITE_ID;

/// Read-only view of a site's ecommerce settings. Create only adopts the
/// existing settings and delete only forgets them.
pub static ECOMMERCE_SETTINGS: ResourceDescriptor = ResourceDescriptor {
    name: "EcommerceSettings",
    description: "Ecommerce settings of a site with ecommerce enabled.",
    id_shape: IdShape::singleton("ecommerce/settings", 1),
    scope_fields: &["siteId"],
    native_id_key: "",
    fields: &[SITE_ID],
    outputs: &[
        OutputSpec::new("defaultCurrency", "ISO 4217 currency code"),
        OutputSpec::new("createdOn", "Timestamp ecommerce was enabled"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/ecommerce/settings"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/ecommerce/settings"),
        read_mode: ReadMode::Get,
        update: None,
        delete: None,
    },
};
