//! Typed documentation-site descriptor and its semantic validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocsError, DocsResult};
use crate::loader::ConfigLoader;

/// Static descriptor consumed by the external documentation tool.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in the navbar and page titles.
    pub title: String,
    /// Origin the site is served from, without a path.
    pub url: String,
    /// Path prefix under `url`; starts and ends with `/`.
    pub base_url: String,
    /// GitHub organization owning the deployment repository.
    pub organization_name: String,
    /// GitHub project name of the deployment repository.
    pub project_name: String,
    /// Branch the static build is pushed to.
    pub deployment_branch: String,
    /// Trailing-slash policy. `None` leaves the tool default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<bool>,
    /// Favicon path relative to the static directory.
    pub favicon: String,
    /// Docs preset options.
    #[serde(default)]
    pub docs: DocsPreset,
    /// Theme preset options.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Sidebar descriptor. Empty means an autogenerated sidebar.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<Sidebar>,
}

/// Docs plugin options for the classic preset.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DocsPreset {
    /// Directory holding the markdown sources.
    pub path: String,
    /// Route the docs are mounted under.
    pub route_base_path: String,
    /// Module path of the emitted sidebar descriptor.
    pub sidebar_path: String,
}

impl Default for DocsPreset {
    fn default() -> Self {
        Self {
            path: "docs".to_string(),
            route_base_path: "/".to_string(),
            sidebar_path: "./sidebars.js".to_string(),
        }
    }
}

/// Theme options for the classic preset.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Stylesheet entry point.
    pub custom_css: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            custom_css: "./src/css/custom.css".to_string(),
        }
    }
}

/// One named sidebar.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Sidebar {
    /// Sidebar id referenced from doc front matter.
    pub id: String,
    /// Ordered sidebar entries.
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// Sidebar entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Single document by id.
    Doc {
        /// Document id, relative to the docs directory without extension.
        id: String,
        /// Optional label overriding the document title.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// Collapsible group of documents.
    Category {
        /// Category heading.
        label: String,
        /// Document ids in the category.
        items: Vec<String>,
        /// Initial collapsed state; `None` keeps the tool default.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
    },
    /// External or absolute link.
    Link {
        /// Link label.
        label: String,
        /// Link target.
        href: String,
    },
}

impl SiteConfig {
    /// Load and deserialize a descriptor from `path`. Does not validate.
    pub fn load(path: &Path) -> DocsResult<Self> {
        ConfigLoader::<Self>::from_path(path).load()
    }

    /// Load a descriptor and run [`SiteConfig::validate`].
    pub fn load_validated(path: &Path) -> DocsResult<Self> {
        let config = Self::load(path)?;
        config
            .validate()
            .map_err(|err| err.with_operation("validate site config").with_path(path))?;
        Ok(config)
    }

    /// Check semantic constraints, returning the first violation found.
    pub fn validate(&self) -> DocsResult<()> {
        require_non_empty("title", &self.title)?;
        validate_origin(&self.url)?;

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(DocsError::validation(
                "base_url",
                format!("`{}` must start and end with `/`", self.base_url),
            ));
        }

        require_non_empty("organization_name", &self.organization_name)?;
        require_non_empty("project_name", &self.project_name)?;
        require_non_empty("deployment_branch", &self.deployment_branch)?;
        require_relative("favicon", &self.favicon)?;

        require_non_empty("docs.path", &self.docs.path)?;
        require_relative("docs.path", &self.docs.path)?;
        if !self.docs.route_base_path.starts_with('/') {
            return Err(DocsError::validation(
                "docs.route_base_path",
                format!("`{}` must start with `/`", self.docs.route_base_path),
            ));
        }
        require_non_empty("docs.sidebar_path", &self.docs.sidebar_path)?;
        require_non_empty("theme.custom_css", &self.theme.custom_css)?;

        self.validate_sidebars()
    }

    fn validate_sidebars(&self) -> DocsResult<()> {
        let mut seen = HashSet::new();
        for sidebar in &self.sidebar {
            require_non_empty("sidebar.id", &sidebar.id)?;
            if !seen.insert(sidebar.id.as_str()) {
                return Err(DocsError::validation(
                    "sidebar.id",
                    format!("duplicate sidebar id `{}`", sidebar.id),
                ));
            }
            for item in &sidebar.items {
                match item {
                    SidebarItem::Doc { id, .. } => require_non_empty("sidebar.items.id", id)?,
                    SidebarItem::Category { label, items, .. } => {
                        require_non_empty("sidebar.items.label", label)?;
                        if items.is_empty() {
                            return Err(DocsError::validation(
                                "sidebar.items.items",
                                format!("category `{label}` has no documents"),
                            ));
                        }
                    }
                    SidebarItem::Link { label, href } => {
                        require_non_empty("sidebar.items.label", label)?;
                        require_non_empty("sidebar.items.href", href)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Absolute URL of the site root (`url` + `base_url`).
    pub fn site_root(&self) -> String {
        format!("{}{}", self.url, self.base_url)
    }

    /// Absolute URL of a page route, honoring the trailing-slash policy.
    pub fn page_url(&self, route: &str) -> String {
        let root = self.site_root();
        let route = route.trim_start_matches('/');
        let joined = format!("{root}{route}");
        let origin_root_len = self.url.len() + 1;

        match self.trailing_slash {
            Some(true) if !joined.ends_with('/') => format!("{joined}/"),
            Some(false) if joined.ends_with('/') && joined.len() > origin_root_len => {
                joined.trim_end_matches('/').to_string()
            }
            _ => joined,
        }
    }
}

fn require_non_empty(field: &'static str, value: &str) -> DocsResult<()> {
    if value.trim().is_empty() {
        return Err(DocsError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_relative(field: &'static str, value: &str) -> DocsResult<()> {
    if value.starts_with('/') || value.contains("://") {
        return Err(DocsError::validation(
            field,
            format!("`{value}` must be a relative path"),
        ));
    }
    Ok(())
}

fn validate_origin(url: &str) -> DocsResult<()> {
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return Err(DocsError::validation(
            "url",
            format!("`{url}` must use http:// or https://"),
        ));
    };

    if rest.is_empty() {
        return Err(DocsError::validation("url", "missing host"));
    }
    if rest.contains(['/', '?', '#']) {
        return Err(DocsError::validation(
            "url",
            format!("`{url}` must not contain a path; put it in `base_url`"),
        )
        .with_hint("set url to the bare origin, e.g. https://example.github.io"));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::DocsErrorCategory;

    pub(crate) fn agent_nn_config() -> SiteConfig {
        SiteConfig {
            title: "Agent-NN Documentation".into(),
            url: "https://ecospheretwork.github.io".into(),
            base_url: "/Agent-NN/".into(),
            organization_name: "EcoSphereNetwork".into(),
            project_name: "Agent-NN".into(),
            deployment_branch: "gh-pages".into(),
            trailing_slash: Some(false),
            favicon: "img/favicon.ico".into(),
            docs: DocsPreset::default(),
            theme: ThemeConfig::default(),
            sidebar: Vec::new(),
        }
    }

    fn field_of(config: &SiteConfig) -> Option<&'static str> {
        let err = config.validate().expect_err("config should be rejected");
        assert_eq!(err.category, DocsErrorCategory::Validation);
        err.field
    }

    #[test]
    fn parses_minimal_descriptor_with_preset_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            title = "Agent-NN Documentation"
            url = "https://ecospheretwork.github.io"
            base_url = "/Agent-NN/"
            organization_name = "EcoSphereNetwork"
            project_name = "Agent-NN"
            deployment_branch = "gh-pages"
            trailing_slash = false
            favicon = "img/favicon.ico"
            "#,
        )
        .expect("parse");

        assert_eq!(config, agent_nn_config());
        config.validate().expect("valid");
    }

    #[test]
    fn parses_tagged_sidebar_items() {
        let config: SiteConfig = toml::from_str(
            r#"
            title = "Docs"
            url = "https://example.org"
            base_url = "/"
            organization_name = "org"
            project_name = "proj"
            deployment_branch = "gh-pages"
            favicon = "img/favicon.ico"

            [[sidebar]]
            id = "docs"

            [[sidebar.items]]
            kind = "doc"
            id = "intro"

            [[sidebar.items]]
            kind = "category"
            label = "Guides"
            items = ["guides/setup"]
            "#,
        )
        .expect("parse");

        assert_eq!(config.trailing_slash, None);
        assert_eq!(
            config.sidebar[0].items,
            vec![
                SidebarItem::Doc {
                    id: "intro".into(),
                    label: None,
                },
                SidebarItem::Category {
                    label: "Guides".into(),
                    items: vec!["guides/setup".into()],
                    collapsed: None,
                },
            ]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = toml::from_str::<DocsPreset>("path = \"docs\"\nsidebar = \"x\"\n")
            .expect_err("unknown key");
        assert!(err.to_string().contains("sidebar"));
    }

    #[test]
    fn rejects_malformed_fields() {
        let mut config = agent_nn_config();
        config.title = "  ".into();
        assert_eq!(field_of(&config), Some("title"));

        let mut config = agent_nn_config();
        config.url = "ftp://example.org".into();
        assert_eq!(field_of(&config), Some("url"));

        let mut config = agent_nn_config();
        config.url = "https://example.org/Agent-NN".into();
        assert_eq!(field_of(&config), Some("url"));

        let mut config = agent_nn_config();
        config.url = "https://".into();
        assert_eq!(field_of(&config), Some("url"));

        let mut config = agent_nn_config();
        config.base_url = "/Agent-NN".into();
        assert_eq!(field_of(&config), Some("base_url"));

        let mut config = agent_nn_config();
        config.deployment_branch = String::new();
        assert_eq!(field_of(&config), Some("deployment_branch"));

        let mut config = agent_nn_config();
        config.favicon = "/img/favicon.ico".into();
        assert_eq!(field_of(&config), Some("favicon"));

        let mut config = agent_nn_config();
        config.docs.route_base_path = "docs".into();
        assert_eq!(field_of(&config), Some("docs.route_base_path"));
    }

    #[test]
    fn rejects_duplicate_sidebars_and_empty_categories() {
        let mut config = agent_nn_config();
        config.sidebar = vec![
            Sidebar {
                id: "docs".into(),
                items: Vec::new(),
            },
            Sidebar {
                id: "docs".into(),
                items: Vec::new(),
            },
        ];
        assert_eq!(field_of(&config), Some("sidebar.id"));

        config.sidebar = vec![Sidebar {
            id: "docs".into(),
            items: vec![SidebarItem::Category {
                label: "Empty".into(),
                items: Vec::new(),
                collapsed: None,
            }],
        }];
        assert_eq!(field_of(&config), Some("sidebar.items.items"));
    }

    #[test]
    fn page_url_applies_trailing_slash_policy() {
        let mut config = agent_nn_config();
        assert_eq!(config.site_root(), "https://ecospheretwork.github.io/Agent-NN/");
        assert_eq!(
            config.page_url("/guides/setup/"),
            "https://ecospheretwork.github.io/Agent-NN/guides/setup"
        );
        assert_eq!(
            config.page_url(""),
            "https://ecospheretwork.github.io/Agent-NN"
        );

        config.trailing_slash = Some(true);
        assert_eq!(
            config.page_url("guides/setup"),
            "https://ecospheretwork.github.io/Agent-NN/guides/setup/"
        );

        config.trailing_slash = None;
        assert_eq!(
            config.page_url("guides/setup"),
            "https://ecospheretwork.github.io/Agent-NN/guides/setup"
        );

        config.trailing_slash = Some(false);
        config.base_url = "/".into();
        assert_eq!(config.page_url(""), "https://ecospheretwork.github.io/");
    }
}
