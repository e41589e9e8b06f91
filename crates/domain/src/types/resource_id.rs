//! Composite resource identifiers.
//!
//! Remote objects only have IDs that are unique inside their parent scope,
//! so the provider stores `scope/.../type-tag/native-id` (or
//! `scope/.../type-tag` for singleton resources) as the canonical ID.
//! A singleton tag may span several segments, e.g. `ecommerce/settings`.

use std::fmt;

use serde::Serialize;

use crate::constants::{ID_SEPARATOR, PREVIEW_ID_PREFIX};
use crate::errors::{ProviderError, Result};

/// Expected layout of a resource type's composite ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdShape {
    pub type_tag: &'static str,
    pub scope_depth: usize,
    pub singleton: bool,
}

impl IdShape {
    pub const fn scoped(type_tag: &'static str, scope_depth: usize) -> Self {
        Self { type_tag, scope_depth, singleton: false }
    }

    pub const fn singleton(type_tag: &'static str, scope_depth: usize) -> Self {
        Self { type_tag, scope_depth, singleton: true }
    }

    /// Number of `/`-separated segments in the type tag.
    pub fn tag_segments(&self) -> usize {
        self.type_tag.split(ID_SEPARATOR).count()
    }

    pub fn segment_count(&self) -> usize {
        self.scope_depth + self.tag_segments() + usize::from(!self.singleton)
    }

    /// Human-readable format, e.g. `{scope}/redirects/{id}`.
    pub fn format_hint(&self) -> String {
        let mut parts: Vec<String> = (0..self.scope_depth)
            .map(|idx| if self.scope_depth == 1 { "{scope}".to_string() } else { format!("{{scope{idx}}}") })
            .collect();
        parts.push(self.type_tag.to_string());
        if !self.singleton {
            parts.push("{id}".to_string());
        }
        parts.join("/")
    }
}

/// Decoded composite identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    scopes: Vec<String>,
    type_tag: String,
    native_id: Option<String>,
}

impl ResourceId {
    /// Build the ID of a resource that carries its own remote identifier.
    pub fn new(
        scopes: Vec<String>,
        type_tag: impl Into<String>,
        native_id: impl Into<String>,
    ) -> Result<Self> {
        let type_tag = type_tag.into();
        let native_id = native_id.into();
        check_components(&scopes, &type_tag)?;
        check_component("native ID", &native_id)?;
        Ok(Self { scopes, type_tag, native_id: Some(native_id) })
    }

    /// Build the ID of a resource that exists at most once per parent scope.
    pub fn singleton(scopes: Vec<String>, type_tag: impl Into<String>) -> Result<Self> {
        let type_tag = type_tag.into();
        check_components(&scopes, &type_tag)?;
        Ok(Self { scopes, type_tag, native_id: None })
    }

    /// Parse and check an encoded ID against the shape of its resource type.
    pub fn decode(raw: &str, shape: &IdShape) -> Result<Self> {
        let malformed = |reason: &str| {
            ProviderError::InvalidId(format!(
                "'{raw}' {reason}; expected format: {}",
                shape.format_hint()
            ))
        };

        if raw.is_empty() {
            return Err(malformed("is empty"));
        }

        let segments: Vec<&str> = raw.split(ID_SEPARATOR).collect();
        if segments.len() != shape.segment_count() {
            return Err(malformed(&format!(
                "has {} segments but {} were expected",
                segments.len(),
                shape.segment_count()
            )));
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(malformed("contains an empty segment"));
        }

        let tag_end = shape.scope_depth + shape.tag_segments();
        let tag = segments[shape.scope_depth..tag_end].join(&ID_SEPARATOR.to_string());
        if tag != shape.type_tag {
            return Err(malformed(&format!("has type tag '{tag}' instead of '{}'", shape.type_tag)));
        }

        let scopes = segments[..shape.scope_depth].iter().map(|s| (*s).to_string()).collect();
        let native_id = (!shape.singleton).then(|| segments[tag_end].to_string());

        Ok(Self { scopes, type_tag: tag, native_id })
    }

    pub fn encode(&self) -> String {
        let mut parts: Vec<&str> = self.scopes.iter().map(String::as_str).collect();
        parts.push(&self.type_tag);
        if let Some(native) = &self.native_id {
            parts.push(native);
        }
        parts.join("/")
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn scope(&self, idx: usize) -> Option<&str> {
        self.scopes.get(idx).map(String::as_str)
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn native_id(&self) -> Option<&str> {
        self.native_id.as_deref()
    }

    /// True for IDs minted by a dry-run create.
    pub fn is_preview(&self) -> bool {
        self.native_id.as_deref().is_some_and(|id| id.starts_with(PREVIEW_ID_PREFIX))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn check_components(scopes: &[String], type_tag: &str) -> Result<()> {
    for scope in scopes {
        check_component("scope", scope)?;
    }
    // Tags are static and may span segments; each segment must be non-empty.
    for segment in type_tag.split(ID_SEPARATOR) {
        check_component("type tag", segment)?;
    }
    Ok(())
}

fn check_component(label: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ProviderError::InvalidId(format!("{label} must not be empty")));
    }
    if value.contains(ID_SEPARATOR) {
        return Err(ProviderError::InvalidId(format!(
            "{label} '{value}' must not contain '{ID_SEPARATOR}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REDIRECTS: IdShape = IdShape::scoped("redirects", 1);
    const ROBOTS: IdShape = IdShape::singleton("robots.txt", 1);

    #[test]
    fn encodes_scoped_and_singleton_ids() {
        let id = ResourceId::new(vec!["5f0c8c9e1c9d440000e8d8c3".into()], "redirects", "abc123").unwrap();
        assert_eq!(id.encode(), "5f0c8c9e1c9d440000e8d8c3/redirects/abc123");

        let robots = ResourceId::singleton(vec!["5f0c8c9e1c9d440000e8d8c3".into()], "robots.txt").unwrap();
        assert_eq!(robots.to_string(), "5f0c8c9e1c9d440000e8d8c3/robots.txt");
        assert_eq!(robots.native_id(), None);
    }

    #[test]
    fn decodes_what_it_encodes() {
        let id = ResourceId::new(vec!["site1".into()], "redirects", "r-42").unwrap();
        let decoded = ResourceId::decode(&id.encode(), &REDIRECTS).unwrap();
        assert_eq!(decoded, id);
        assert_eq!(decoded.scope(0), Some("site1"));
        assert_eq!(decoded.native_id(), Some("r-42"));

        let robots = ResourceId::decode("site1/robots.txt", &ROBOTS).unwrap();
        assert_eq!(robots.scopes(), ["site1".to_string()]);
    }

    #[test]
    fn allows_ids_without_scopes() {
        let shape = IdShape::scoped("things", 0);
        let id = ResourceId::new(Vec::new(), "things", "t1").unwrap();
        assert_eq!(id.encode(), "things/t1");
        assert_eq!(ResourceId::decode("things/t1", &shape).unwrap(), id);
    }

    #[test]
    fn rejects_components_with_separator_or_empty() {
        assert!(ResourceId::new(vec!["a/b".into()], "redirects", "x").is_err());
        assert!(ResourceId::new(vec!["site".into()], "redirects", "x/y").is_err());
        assert!(ResourceId::new(vec![String::new()], "redirects", "x").is_err());
        assert!(ResourceId::singleton(vec!["site".into()], "").is_err());
    }

    #[test]
    fn decode_reports_malformed_input() {
        for raw in ["", "site1/redirects", "site1/redirects/a/b", "site1/webhooks/abc", "site1//abc"] {
            let err = ResourceId::decode(raw, &REDIRECTS).unwrap_err();
            assert!(matches!(err, ProviderError::InvalidId(_)), "{raw}");
            assert!(err.message().contains(raw), "message should echo '{raw}'");
            assert!(err.message().contains("{scope}/redirects/{id}"));
        }
    }

    #[test]
    fn singleton_tags_may_span_segments() {
        let shape = IdShape::singleton("ecommerce/settings", 1);
        assert_eq!(shape.segment_count(), 3);
        assert_eq!(shape.format_hint(), "{scope}/ecommerce/settings");

        let id = ResourceId::singleton(vec!["site1".into()], "ecommerce/settings").unwrap();
        assert_eq!(id.encode(), "site1/ecommerce/settings");
        assert_eq!(ResourceId::decode("site1/ecommerce/settings", &shape).unwrap(), id);

        for raw in ["site1/ecommerce", "site1/ecommerce/other", "site1/ecommerce_settings", "site1//settings"] {
            assert!(ResourceId::decode(raw, &shape).is_err(), "{raw}");
        }
        assert!(ResourceId::singleton(vec!["site1".into()], "ecommerce//settings").is_err());
    }

    #[test]
    fn detects_preview_ids() {
        let preview = ResourceId::new(vec!["site1".into()], "redirects", "preview-123").unwrap();
        assert!(preview.is_preview());
        let real = ResourceId::new(vec!["site1".into()], "redirects", "abc").unwrap();
        assert!(!real.is_preview());
    }
}
