use webflow_domain::{
    Encoding, Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, OutputSpec,
    ReadMode, ResourceDescriptor,
};

use super::SITE_ID;

/// A site member. Create sends an invitation email.
pub static USER: ResourceDescriptor = ResourceDescriptor {
    name: "User",
    description: "A member of a site with user accounts enabled.",
    id_shape: IdShape::scoped("users", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("email", FieldKind::String)
            .required()
            .replace()
            .keys("email", "data.email")
            .rule(FieldRule::Email)
            .describe("Address the invitation is sent to"),
        FieldSpec::new("accessGroups", FieldKind::StringList)
            .rule(FieldRule::NoBlankItems)
            .encoding(Encoding::SlugList)
            .describe("Access group slugs granted to the user"),
        FieldSpec::new("name", FieldKind::String).key("data.name"),
    ],
    outputs: &[
        OutputSpec::new("status", "invited, verified or unverified"),
        OutputSpec::new("isEmailVerified", "Whether the user confirmed their email"),
        OutputSpec::new("invitedOn", "Invitation timestamp"),
        OutputSpec::new("lastLogin", "Last login timestamp"),
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/users/invite"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/users/{id}"),
        read_mode: ReadMode::Get,
        update: Some(Endpoint::new(HttpMethod::Patch, "/v2/sites/{siteId}/users/{id}")),
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/sites/{siteId}/users/{id}")),
    },
};
