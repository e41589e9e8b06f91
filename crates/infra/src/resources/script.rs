//! Registered scripts and their placement in site custom code.

use webflow_domain::{
    Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, OutputSpec, ReadMode,
    ResourceDescriptor,
};

use super::SITE_ID;

const SCRIPT_OUTPUTS: &[OutputSpec] = &[
    OutputSpec::new("createdOn", "Creation timestamp"),
    OutputSpec::new("lastUpdated", "Last modification timestamp"),
];

pub static REGISTERED_SCRIPT: ResourceDescriptor = ResourceDescriptor {
    name: "RegisteredScript",
    description: "An externally hosted script registered with a site.",
    id_shape: IdShape::scoped("registered_scripts", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("displayName", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::Alphanumeric(50))
            .describe("Alphanumeric script name, e.g. CmsSlider"),
        FieldSpec::new("hostedLocation", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::Url { https_only: true })
            .describe("HTTPS URL the script is served from"),
        FieldSpec::new("integrityHash", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::IntegrityHash)
            .describe("Subresource integrity hash, e.g. sha384-..."),
        FieldSpec::new("version", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::Version)
            .describe("Semantic version of the script"),
        FieldSpec::new("canCopy", FieldKind::Boolean)
            .replace()
            .describe("Whether the script can be copied on site duplication"),
    ],
    outputs: SCRIPT_OUTPUTS,
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/registered_scripts/hosted"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/registered_scripts"),
        read_mode: ReadMode::FindInList { list_key: "registeredScripts" },
        update: None,
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/sites/{siteId}/registered_scripts/{id}")),
    },
};

/// Inline scripts are stored by the API and listed with hosted ones; the
/// source is never returned.
pub static INLINE_SCRIPT: ResourceDescriptor = ResourceDescriptor {
    name: "InlineScript",
    description: "An inline script registered with a site.",
    id_shape: IdShape::scoped("inline_scripts", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("sourceCode", FieldKind::String)
            .required()
            .replace()
            .write_only()
            .rule(FieldRule::MaxLength(2000))
            .describe("Inline JavaScript, at most 2000 characters"),
        FieldSpec::new("version", FieldKind::String).required().replace().rule(FieldRule::Version),
        FieldSpec::new("displayName", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::Alphanumeric(50)),
        FieldSpec::new("canCopy", FieldKind::Boolean).replace(),
        FieldSpec::new("integrityHash", FieldKind::String).replace().rule(FieldRule::IntegrityHash),
    ],
    outputs: SCRIPT_OUTPUTS,
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/registered_scripts/inline"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/registered_scripts"),
        read_mode: ReadMode::FindInList { list_key: "registeredScripts" },
        update: None,
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/sites/{siteId}/registered_scripts/{id}")),
    },
};

/// Scripts applied site-wide. One per site; PUT replaces the whole list.
pub static SITE_CUSTOM_CODE: ResourceDescriptor = ResourceDescriptor {
    name: "SiteCustomCode",
    description: "Registered scripts applied to every page of a site.",
    id_shape: IdShape::singleton("custom_code", 1),
    scope_fields: &["siteId"],
    native_id_key: "",
    fields: &[
        SITE_ID,
        FieldSpec::new("scripts", FieldKind::ObjectList)
            .required()
            .rule(FieldRule::ScriptEntries)
            .describe("Entries of {id, version, location, attributes}; location is header or footer"),
    ],
    outputs: SCRIPT_OUTPUTS,
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Put, "/v2/sites/{siteId}/custom_code"),
        read: Endpoint::new(HttpMethod::Get, "/v2/sites/{siteId}/custom_code"),
        read_mode: ReadMode::Get,
        update: Some(Endpoint::new(HttpMethod::Put, "/v2/sites/{siteId}/custom_code")),
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/sites/{siteId}/custom_code")),
    },
};
