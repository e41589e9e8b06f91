//! Resource catalogue.
//!
//! One static descriptor per remote resource type. The generic adapter in
//! `webflow-core` turns each of them into a full lifecycle implementation.

pub mod asset;
pub mod collection;
pub mod ecommerce;
pub mod page;
pub mod redirect;
pub mod robots_txt;
pub mod script;
pub mod site;
pub mod user;
pub mod webhook;

use webflow_domain::{FieldKind, FieldRule, FieldSpec, ResourceDescriptor};

/// Parent site of a site-scoped resource.
pub(crate) const SITE_ID: FieldSpec = FieldSpec::new("siteId", FieldKind::String)
    .required()
    .replace()
    .rule(FieldRule::ObjectId)
    .describe("ID of the site that owns this resource");

static CATALOGUE: &[&ResourceDescriptor] = &[
    &site::SITE,
    &redirect::REDIRECT,
    &robots_txt::ROBOTS_TXT,
    &collection::COLLECTION,
    &collection::COLLECTION_FIELD,
    &collection::COLLECTION_ITEM,
    &webhook::WEBHOOK,
    &asset::ASSET_FOLDER,
    &asset::ASSET,
    &script::REGISTERED_SCRIPT,
    &script::INLINE_SCRIPT,
    &script::SITE_CUSTOM_CODE,
    &user::USER,
    &ecommerce::ECOMMERCE_SETTINGS,
    &page::PAGE_DATA,
    &page::PAGE_CONTENT,
    &page::PAGE_CUSTOM_CODE,
];

/// Every resource type the provider manages.
pub fn catalogue() -> &'static [&'static ResourceDescriptor] {
    CATALOGUE
}
