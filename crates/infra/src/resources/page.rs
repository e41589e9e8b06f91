//! Pages and the page-level content the API lets us manage.
//!
//! Pages themselves are built in the designer; the provider can only adopt
//! an existing page, rewrite text nodes, and place registered scripts.

use webflow_domain::{
    Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, OutputSpec, ReadMode,
    ResourceDescriptor,
};

use super::SITE_ID;

/// Page that owns a page-scoped resource.
const PAGE_ID: FieldSpec = FieldSpec::new("pageId", FieldKind::String)
    .required()
    .replace()
    .rule(FieldRule::ObjectId)
    .describe("ID of the page, e.g. 5f0c8c9e1c9d440000e8d8c4");

/// An existing page, adopted by ID. Create reads the page; delete only
/// forgets it.
pub static PAGE_DATA: ResourceDescriptor = ResourceDescriptor {
    name: "PageData",
    description: "Metadata of an existing page. Pages are created in the designer, not via the API.",
    id_shape: IdShape::scoped("pages", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[SITE_ID, PAGE_ID.keys("pageId", "id")],
    outputs: &[
        OutputSpec::new("title", "Page title shown in browser tabs and search results"),
        OutputSpec::new("slug", "URL slug, e.g. about for /about"),
        OutputSpec::new("parentId", "Parent page of a nested page"),
        OutputSpec::new("collectionId", "CMS collection of a collection template page"),
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
        OutputSpec::new("archived", "Whether the page is archived"),
        OutputSpec::new("draft", "Whether the page is a draft"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Get, "/v2/pages/{pageId}"),
        read: Endpoint::new(HttpMethod::Get, "/v2/pages/{id}"),
        read_mode: ReadMode::Get,
        update: None,
        delete: None,
    },
};

/// Text of existing DOM nodes on a page. The node list is not read back
/// since the DOM endpoint reports every node of the page.
pub static PAGE_CONTENT: ResourceDescriptor = ResourceDescriptor {
    name: "PageContent",
    description: "Static text content of existing nodes on a page.",
    id_shape: IdShape::singleton("content", 1),
    scope_fields: &["pageId"],
    native_id_key: "",
    fields: &[
        PAGE_ID,
        FieldSpec::new("nodes", FieldKind::ObjectList)
            .required()
            .write_only()
            .rule(FieldRule::TextNodes)
            .describe("Node updates of {nodeId, text}; node IDs come from the page DOM"),
    ],
    outputs: &[],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Put, "/v2/pages/{pageId}/dom"),
        read: Endpoint::new(HttpMethod::Get, "/v2/pages/{pageId}/dom"),
        read_mode: ReadMode::Get,
        update: Some(Endpoint::new(HttpMethod::Put, "/v2/pages/{pageId}/dom")),
        // Removing content would break the page; delete stops managing it.
        delete: None,
    },
};

pub static PAGE_CUSTOM_CODE: ResourceDescriptor = ResourceDescriptor {
    name: "PageCustomCode",
    description: "Registered scripts applied to a single page.",
    id_shape: IdShape::singleton("custom-code", 1),
    scope_fields: &["pageId"],
    native_id_key: "",
    fields: &[
        PAGE_ID,
        FieldSpec::new("scripts", FieldKind::ObjectList)
            .required()
            .rule(FieldRule::ScriptEntries)
            .describe("Entries of {id, version, location, attributes}; location is header or footer"),
    ],
    outputs: &[
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Put, "/v2/pages/{pageId}/custom_code"),
        read: Endpoint::new(HttpMethod::Get, "/v2/pages/{pageId}/custom_code"),
        read_mode: ReadMode::Get,
        update: Some(Endpoint::new(HttpMethod::Put, "/v2/pages/{pageId}/custom_code")),
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/pages/{pageId}/custom_code")),
    },
};
