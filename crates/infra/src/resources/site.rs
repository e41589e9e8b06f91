use webflow_domain::{
    Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, OutputSpec, ReadMode,
    ResourceDescriptor,
};

pub static SITE: ResourceDescriptor = ResourceDescriptor {
    name: "Site",
    description: "A Webflow site inside a workspace. Site creation requires an Enterprise workspace.",
    id_shape: IdShape::scoped("sites", 1),
    scope_fields: &["workspaceId"],
    native_id_key: "id",
    fields: &[
        FieldSpec::new("workspaceId", FieldKind::String)
            .required()
            .replace()
            .describe("Workspace that owns the site"),
        FieldSpec::new("displayName", FieldKind::String)
            .required()
            .keys("name", "displayName")
            .rule(FieldRule::MaxLength(255))
            .describe("Human-readable site name"),
        FieldSpec::new("shortName", FieldKind::String)
            .unique()
            .rule(FieldRule::Slug)
            .describe("Subdomain slug; generated from displayName when omitted"),
        FieldSpec::new("timeZone", FieldKind::String).replace().describe("IANA time zone of the site"),
        FieldSpec::new("parentFolderId", FieldKind::String).describe("Workspace folder that contains the site"),
        FieldSpec::new("templateName", FieldKind::String)
            .replace()
            .write_only()
            .describe("Template the site is created from"),
    ],
    outputs: &[
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
        OutputSpec::new("lastPublished", "Last publish timestamp"),
        OutputSpec::new("previewUrl", "URL of the site preview image"),
        OutputSpec::new("customDomains", "Custom domains attached to the site"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/workspaces/{workspaceId}/sites"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{id}"),
        read_mode: ReadMode::Get,
        update: Some(Endpoint::new(HttpMethod::Patch, "/v2/sites/{id}")),
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/sites/{id}")),
    },
};
