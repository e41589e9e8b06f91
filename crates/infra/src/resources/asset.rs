//! Asset folders and uploaded assets.

use webflow_domain::{
    Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, OutputSpec, ReadMode,
    ResourceDescriptor,
};

use super::SITE_ID;

/// The API cannot delete asset folders; delete only forgets the folder.
pub static ASSET_FOLDER: ResourceDescriptor = ResourceDescriptor {
    name: "AssetFolder",
    description: "A folder in the site's asset library.",
    id_shape: IdShape::scoped("asset-folders", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("displayName", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::MaxLength(255)),
        FieldSpec::new("parentFolder", FieldKind::String)
            .replace()
            .rule(FieldRule::ObjectId)
            .describe("Folder to nest this folder under"),
    ],
    outputs: &[
        OutputSpec::new("assets", "IDs of the assets in the folder"),
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/asset_folders"),
        read: Endpoint::new(HttpMethod::Get, "/v2/asset_folders/{id}"),
        read_mode: ReadMode::Get,
        update: None,
        delete: None,
    },
};

pub static ASSET: ResourceDescriptor = ResourceDescriptor {
    name: "Asset",
    description: "An asset upload registered with the site. The file itself is uploaded to the \
                  returned upload URL out of band.",
    id_shape: IdShape::scoped("assets", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("fileName", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::MaxLength(255))
            .keys("fileName", "originalFileName")
            .describe("File name with extension, e.g. logo.png"),
        FieldSpec::new("fileHash", FieldKind::String)
            .required()
            .replace()
            .write_only()
            .rule(FieldRule::Md5)
            .describe("MD5 hash of the file content"),
        FieldSpec::new("parentFolder", FieldKind::String).replace().rule(FieldRule::ObjectId),
        FieldSpec::new("fileSource", FieldKind::String)
            .replace()
            .write_only()
            .describe("Local path or URL of the file to upload"),
    ],
    outputs: &[
        OutputSpec::new("uploadUrl", "Pre-signed URL the file is uploaded to"),
        OutputSpec::new("hostedUrl", "CDN URL of the uploaded asset"),
        OutputSpec::new("contentType", "MIME type of the asset"),
        OutputSpec::new("size", "Size in bytes"),
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastUpdated", "Last modification timestamp"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/assets"),
        read: Endpoint::new(HttpMethod::Get, "/v2/assets/{id}"),
        read_mode: ReadMode::Get,
        update: None,
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/assets/{id}")),
    },
};
