//! Conversion between robots.txt text and the structured form the remote
//! API stores.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    #[serde(default)]
    pub allows: Vec<String>,
    #[serde(default)]
    pub disallows: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsDocument {
    #[serde(default)]
    pub rules: Vec<RobotsRule>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sitemap: String,
}

fn directive<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let prefix = line.get(..name.len())?;
    if prefix.eq_ignore_ascii_case(name) {
        line.get(name.len()..).map(str::trim)
    } else {
        None
    }
}

/// Parse robots.txt text. Directives are case-insensitive; Allow and
/// Disallow lines before the first User-agent are ignored.
pub fn parse(content: &str) -> RobotsDocument {
    let mut document = RobotsDocument::default();
    let mut current: Option<RobotsRule> = None;

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(sitemap) = directive(line, "sitemap:") {
            document.sitemap = sitemap.to_string();
        } else if let Some(agent) = directive(line, "user-agent:") {
            if let Some(rule) = current.take() {
                document.rules.push(rule);
            }
            current = Some(RobotsRule { user_agent: agent.to_string(), ..RobotsRule::default() });
        } else if let Some(rule) = current.as_mut() {
            if let Some(path) = directive(line, "allow:").filter(|p| !p.is_empty()) {
                rule.allows.push(path.to_string());
            } else if let Some(path) = directive(line, "disallow:").filter(|p| !p.is_empty()) {
                rule.disallows.push(path.to_string());
            }
        }
    }

    if let Some(rule) = current {
        document.rules.push(rule);
    }
    document
}

/// Render the structured form back to robots.txt text.
pub fn format(document: &RobotsDocument) -> String {
    let mut out = String::new();
    for rule in &document.rules {
        out.push_str(&format!("User-agent: {}\n", rule.user_agent));
        for path in &rule.allows {
            out.push_str(&format!("Allow: {path}\n"));
        }
        for path in &rule.disallows {
            out.push_str(&format!("Disallow: {path}\n"));
        }
    }
    if !document.sitemap.is_empty() {
        if !document.rules.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("Sitemap: {}\n", document.sitemap));
    }
    out
}

/// Canonical text form, so that cosmetic differences do not show up as drift.
pub fn normalize(content: &str) -> String {
    format(&parse(content))
}
