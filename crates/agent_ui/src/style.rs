//! Variant-to-style resolution shared by every primitive.
//!
//! Each option enum implements [`StyleToken`], pairing a stable lowercase
//! token (emitted as `data-ui-*` attributes) with a fixed Tailwind class
//! bundle. [`resolve_style`] assembles the final descriptor in a fixed order:
//! base classes, variant classes, size classes, then the caller extension.

use std::fmt::Debug;

/// Closed option set that maps each value to a fixed class bundle.
pub trait StyleToken: Copy + Default + Eq + Debug + 'static {
    /// Every value of the option set, in declaration order.
    const ALL: &'static [Self];

    /// Stable lowercase token for DOM attributes and diagnostics.
    fn token(self) -> &'static str;

    /// Fixed class bundle applied for this value.
    fn classes(self) -> &'static str;
}

/// Ordered, whitespace-normalized class list builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    segments: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class segment. Blank segments are skipped.
    pub fn push(&mut self, segment: &str) -> &mut Self {
        let segment = segment.trim();
        if !segment.is_empty() {
            self.segments.push(segment.to_string());
        }
        self
    }

    /// Append a segment only when `enabled` is true.
    pub fn push_if(&mut self, enabled: bool, segment: &str) -> &mut Self {
        if enabled {
            self.push(segment);
        }
        self
    }

    /// Append the class bundle of an option token.
    pub fn push_token<T: StyleToken>(&mut self, token: T) -> &mut Self {
        self.push(token.classes())
    }

    /// Append an optional caller-supplied extension verbatim. Blank
    /// extensions are skipped.
    pub fn push_extension(&mut self, extension: Option<&str>) -> &mut Self {
        if let Some(extension) = extension.filter(|extension| !extension.trim().is_empty()) {
            self.segments.push(extension.to_string());
        }
        self
    }

    /// Join all segments with single spaces.
    pub fn build(&self) -> String {
        self.segments.join(" ")
    }
}

/// Resolve a full style descriptor for one variant/size pair.
///
/// The extension, when present, is always the final segment and is kept
/// exactly as the caller wrote it.
pub fn resolve_style<V, S>(base: &str, variant: V, size: S, extension: Option<&str>) -> String
where
    V: StyleToken,
    S: StyleToken,
{
    ClassList::new()
        .push(base)
        .push_token(variant)
        .push_token(size)
        .push_extension(extension)
        .build()
}
