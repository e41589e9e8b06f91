//! CMS collections, their fields, and their items.

use webflow_domain::{
    Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, OutputSpec, ReadMode,
    ResourceDescriptor,
};

use super::SITE_ID;

const COLLECTION_ID: FieldSpec = FieldSpec::new("collectionId", FieldKind::String)
    .required()
    .replace()
    .rule(FieldRule::ObjectId)
    .describe("ID of the parent collection");

const FIELD_TYPES: &[&str] = &[
    "PlainText",
    "RichText",
    "Image",
    "MultiImage",
    "Video",
    "Link",
    "Email",
    "Phone",
    "Number",
    "DateTime",
    "Switch",
    "Color",
    "Option",
    "File",
    "Reference",
    "MultiReference",
];

pub static COLLECTION: ResourceDescriptor = ResourceDescriptor {
    name: "Collection",
    description: "A CMS collection. The API has no collection update, so every change replaces it.",
    id_shape: IdShape::scoped("collections", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("displayName", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::MaxLength(255))
            .describe("Plural name shown in the CMS, e.g. Blog Posts"),
        FieldSpec::new("singularName", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::MaxLength(255))
            .describe("Singular item name, e.g. Blog Post"),
        FieldSpec::new("slug", FieldKind::String)
            .replace()
            .rule(FieldRule::Slug)
            .describe("URL slug; generated from displayName when omitted"),
    ],
    outputs: &[
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/collections"),
        read: Endpoint::new(HttpMethod::Get, "/v2/collections/{id}"),
        read_mode: ReadMode::Get,
        update: None,
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/collections/{id}")),
    },
};

pub static COLLECTION_FIELD: ResourceDescriptor = ResourceDescriptor {
    name: "CollectionField",
    description: "A field in a CMS collection schema.",
    id_shape: IdShape::scoped("fields", 1),
    scope_fields: &["collectionId"],
    native_id_key: "id",
    fields: &[
        COLLECTION_ID,
        FieldSpec::new("type", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::OneOf(FIELD_TYPES))
            .describe("Field type; cannot be changed after creation"),
        FieldSpec::new("displayName", FieldKind::String)
            .required()
            .rule(FieldRule::MaxLength(255))
            .describe("Field label shown in the CMS"),
        FieldSpec::new("slug", FieldKind::String).unique().rule(FieldRule::Slug),
        FieldSpec::new("isRequired", FieldKind::Boolean),
        FieldSpec::new("helpText", FieldKind::String),
        FieldSpec::new("validations", FieldKind::Object).describe("Type-specific validation settings"),
    ],
    outputs: &[OutputSpec::new("isEditable", "Whether the field can be edited in the CMS")],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/collections/{collectionId}/fields"),
        read: Endpoint::new(HttpMethod::Get, "/v2/collections/{collectionId}"),
        read_mode: ReadMode::FindInList { list_key: "fields" },
        update: Some(Endpoint::new(HttpMethod::Patch, "/v2/collections/{collectionId}/fields/{id}")),
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/collections/{collectionId}/fields/{id}")),
    },
};

pub static COLLECTION_ITEM: ResourceDescriptor = ResourceDescriptor {
    name: "CollectionItem",
    description: "An item in a CMS collection.",
    id_shape: IdShape::scoped("items", 1),
    scope_fields: &["collectionId"],
    native_id_key: "id",
    fields: &[
        COLLECTION_ID,
        FieldSpec::new("fieldData", FieldKind::Object)
            .required()
            .describe("Field values keyed by field slug; must include name and slug"),
        FieldSpec::new("isArchived", FieldKind::Boolean),
        FieldSpec::new("isDraft", FieldKind::Boolean),
        FieldSpec::new("cmsLocaleId", FieldKind::String).describe("Locale of the item on localized sites"),
    ],
    outputs: &[
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
        OutputSpec::new("lastPublished", "Last publish timestamp"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/collections/{collectionId}/items"),
        read: Endpoint::new(HttpMethod::Get, "/v2/collections/{collectionId}/items/{id}"),
        read_mode: ReadMode::Get,
        update: Some(Endpoint::new(HttpMethod::Patch, "/v2/collections/{collectionId}/items/{id}")),
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/collections/{collectionId}/items/{id}")),
    },
};
