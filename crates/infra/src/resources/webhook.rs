use webflow_domain::{
    Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod, IdShape, OutputSpec, ReadMode,
    ResourceDescriptor,
};

use super::SITE_ID;

const TRIGGER_TYPES: &[&str] = &[
    "form_submission",
    "site_publish",
    "page_created",
    "page_metadata_updated",
    "page_deleted",
    "ecomm_new_order",
    "ecomm_order_changed",
    "ecomm_inventory_changed",
    "memberships_user_account_added",
    "memberships_user_account_updated",
    "memberships_user_account_deleted",
    "collection_item_created",
    "collection_item_changed",
    "collection_item_deleted",
    "collection_item_unpublished",
];

pub static WEBHOOK: ResourceDescriptor = ResourceDescriptor {
    name: "Webhook",
    description: "A webhook that posts site events to an HTTPS endpoint.",
    id_shape: IdShape::scoped("webhooks", 1),
    scope_fields: &["siteId"],
    native_id_key: "id",
    fields: &[
        SITE_ID,
        FieldSpec::new("triggerType", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::OneOf(TRIGGER_TYPES))
            .describe("Event that fires the webhook"),
        FieldSpec::new("url", FieldKind::String)
            .required()
            .replace()
            .rule(FieldRule::Url { https_only: true })
            .describe("HTTPS endpoint that receives the event"),
        FieldSpec::new("filter", FieldKind::Object).replace().describe("Optional event filter"),
    ],
    outputs: &[
        OutputSpec::new("workspaceId", "Workspace of the site"),
        OutputSpec::new("createdOn", "Creation timestamp"),
        OutputSpec::new("lastTriggered", "Last delivery timestamp"),
    ],
    endpoints: Endpoints {
        create: Endpoint::new(HttpMethod::Post, "/v2/sites/{siteId}/webhooks"),
        read: Endpoint::new(HttpMethod::Get, "/v2/webhooks/{id}"),
        read_mode: ReadMode::Get,
        update: None,
        delete: Some(Endpoint::new(HttpMethod::Delete, "/v2/webhooks/{id}")),
    },
};
