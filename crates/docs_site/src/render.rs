//! CommonJS emission of the docs-tool config and sidebar modules.

use crate::site::{SidebarItem, SiteConfig};

const CONFIG_TYPE: &str = "import('@docusaurus/types').Config";
const PRESET_TYPE: &str = "import('@docusaurus/preset-classic').Options";
const SIDEBARS_TYPE: &str = "import('@docusaurus/plugin-content-docs').SidebarsConfig";
const DEFAULT_SIDEBAR_ID: &str = "docs";

/// Minimal JavaScript expression tree for the emitted modules.
#[derive(Clone, Debug, PartialEq)]
pub enum JsExpr {
    /// Single-quoted string literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// `require.resolve('<path>')` call.
    Resolve(String),
    /// Array literal, one element per line.
    Array(Vec<JsExpr>),
    /// Object literal, one property per line.
    Object(Vec<(String, JsExpr)>),
    /// JSDoc type cast: `/** @type {T} */ (expr)`.
    Typed(&'static str, Box<JsExpr>),
}

impl JsExpr {
    fn str(value: &str) -> Self {
        Self::Str(value.to_string())
    }

    fn object(entries: Vec<(&str, JsExpr)>) -> Self {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    /// Render this expression at the given nesting depth.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, depth);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        match self {
            Self::Str(value) => out.push_str(&quote(value)),
            Self::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
            Self::Resolve(path) => {
                out.push_str("require.resolve(");
                out.push_str(&quote(path));
                out.push(')');
            }
            Self::Array(items) if items.is_empty() => out.push_str("[]"),
            Self::Array(items) => {
                out.push_str("[\n");
                for item in items {
                    out.push_str(&indent(depth + 1));
                    item.write(out, depth + 1);
                    out.push_str(",\n");
                }
                out.push_str(&indent(depth));
                out.push(']');
            }
            Self::Object(entries) if entries.is_empty() => out.push_str("{}"),
            Self::Object(entries) => {
                out.push_str("{\n");
                for (key, value) in entries {
                    out.push_str(&indent(depth + 1));
                    out.push_str(&property_key(key));
                    out.push_str(": ");
                    value.write(out, depth + 1);
                    out.push_str(",\n");
                }
                out.push_str(&indent(depth));
                out.push('}');
            }
            Self::Typed(type_ref, inner) => {
                out.push_str("/** @type {");
                out.push_str(type_ref);
                out.push_str("} */ (");
                inner.write(out, depth);
                out.push(')');
            }
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

fn property_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$');
    if is_identifier {
        key.to_string()
    } else {
        quote(key)
    }
}

fn module(type_ref: &str, binding: &str, value: &JsExpr) -> String {
    format!(
        "// @ts-check\n/** @type {{{type_ref}}} */\nconst {binding} = {};\nmodule.exports = {binding};\n",
        value.render(0)
    )
}

/// Build the config object expression for a descriptor.
pub fn config_expr(config: &SiteConfig) -> JsExpr {
    let mut entries = vec![
        ("title", JsExpr::str(&config.title)),
        ("url", JsExpr::str(&config.url)),
        ("baseUrl", JsExpr::str(&config.base_url)),
        ("organizationName", JsExpr::str(&config.organization_name)),
        ("projectName", JsExpr::str(&config.project_name)),
        ("deploymentBranch", JsExpr::str(&config.deployment_branch)),
    ];
    if let Some(trailing_slash) = config.trailing_slash {
        entries.push(("trailingSlash", JsExpr::Bool(trailing_slash)));
    }
    entries.push(("favicon", JsExpr::str(&config.favicon)));

    let preset_options = JsExpr::object(vec![
        (
            "docs",
            JsExpr::object(vec![
                ("path", JsExpr::str(&config.docs.path)),
                ("routeBasePath", JsExpr::str(&config.docs.route_base_path)),
                ("sidebarPath", JsExpr::Resolve(config.docs.sidebar_path.clone())),
            ]),
        ),
        (
            "theme",
            JsExpr::object(vec![(
                "customCss",
                JsExpr::Resolve(config.theme.custom_css.clone()),
            )]),
        ),
    ]);
    entries.push((
        "presets",
        JsExpr::Array(vec![JsExpr::Array(vec![
            JsExpr::str("classic"),
            JsExpr::Typed(PRESET_TYPE, Box::new(preset_options)),
        ])]),
    ));

    JsExpr::object(entries)
}

/// Emit the `docusaurus.config.js` module for a descriptor.
pub fn render_docusaurus_config(config: &SiteConfig) -> String {
    module(CONFIG_TYPE, "config", &config_expr(config))
}

fn sidebar_item_expr(item: &SidebarItem) -> JsExpr {
    match item {
        SidebarItem::Doc { id, label: None } => JsExpr::str(id),
        SidebarItem::Doc {
            id,
            label: Some(label),
        } => JsExpr::object(vec![
            ("type", JsExpr::str("doc")),
            ("id", JsExpr::str(id)),
            ("label", JsExpr::str(label)),
        ]),
        SidebarItem::Category {
            label,
            items,
            collapsed,
        } => {
            let mut entries = vec![("type", JsExpr::str("category")), ("label", JsExpr::str(label))];
            if let Some(collapsed) = collapsed {
                entries.push(("collapsed", JsExpr::Bool(*collapsed)));
            }
            entries.push((
                "items",
                JsExpr::Array(items.iter().map(|id| JsExpr::str(id)).collect()),
            ));
            JsExpr::object(entries)
        }
        SidebarItem::Link { label, href } => JsExpr::object(vec![
            ("type", JsExpr::str("link")),
            ("label", JsExpr::str(label)),
            ("href", JsExpr::str(href)),
        ]),
    }
}

/// Build the sidebars object expression. No sidebars means one autogenerated sidebar.
pub fn sidebars_expr(config: &SiteConfig) -> JsExpr {
    if config.sidebar.is_empty() {
        return JsExpr::object(vec![(
            DEFAULT_SIDEBAR_ID,
            JsExpr::Array(vec![JsExpr::object(vec![
                ("type", JsExpr::str("autogenerated")),
                ("dirName", JsExpr::str(".")),
            ])]),
        )]);
    }

    JsExpr::Object(
        config
            .sidebar
            .iter()
            .map(|sidebar| {
                (
                    sidebar.id.clone(),
                    JsExpr::Array(sidebar.items.iter().map(sidebar_item_expr).collect()),
                )
            })
            .collect(),
    )
}

/// Emit the `sidebars.js` module for a descriptor.
pub fn render_sidebars(config: &SiteConfig) -> String {
    module(SIDEBARS_TYPE, "sidebars", &sidebars_expr(config))
}
