//! Shared option enums and the badge, control, feedback, and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::style::{resolve_style, ClassList, StyleToken};

mod controls;
mod data_display;
mod feedback;
mod overlays;

pub use controls::{button_class, input_class, input_message_class, Button, Input};
pub use data_display::{badge_class, card_class, Badge, Card};
pub use feedback::{
    progress_fill_class, progress_percent, progress_track_class, spinner_class, LoadingSpinner,
    ProgressBar,
};
pub use overlays::{modal_overlay_class, modal_panel_class, Modal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic status colors shared by badges and progress fills.
pub enum StatusVariant {
    /// Neutral gray.
    Default,
    /// Positive/completed.
    Success,
    /// Needs attention.
    Warning,
    /// Failed or destructive.
    Danger,
    /// Informational.
    Info,
}

impl Default for StatusVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleToken for StatusVariant {
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-gray-100 dark:bg-gray-700 text-gray-800 dark:text-gray-300 border-gray-200 dark:border-gray-600",
            Self::Success => "bg-green-100 dark:bg-green-900/30 text-green-800 dark:text-green-300 border-green-200 dark:border-green-800",
            Self::Warning => "bg-yellow-100 dark:bg-yellow-900/30 text-yellow-800 dark:text-yellow-300 border-yellow-200 dark:border-yellow-800",
            Self::Danger => "bg-red-100 dark:bg-red-900/30 text-red-800 dark:text-red-300 border-red-200 dark:border-red-800",
            Self::Info => "bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-300 border-blue-200 dark:border-blue-800",
        }
    }
}

impl StatusVariant {
    /// Solid fill colors used by progress indicators.
    pub fn fill_classes(self) -> &'static str {
        match self {
            Self::Default => "bg-blue-600 dark:bg-blue-500",
            Self::Success => "bg-green-600 dark:bg-green-500",
            Self::Warning => "bg-yellow-500 dark:bg-yellow-400",
            Self::Danger => "bg-red-600 dark:bg-red-500",
            Self::Info => "bg-sky-500 dark:bg-sky-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge sizing tokens.
pub enum BadgeSize {
    /// Compact badge.
    Sm,
    /// Default badge.
    Md,
}

impl Default for BadgeSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for BadgeSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-2 py-1 text-xs",
            Self::Md => "px-3 py-1 text-sm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button variants.
pub enum ButtonVariant {
    /// Primary emphasized action.
    Primary,
    /// Secondary neutral action.
    Secondary,
    /// Outlined action on transparent background.
    Outline,
    /// Quiet action with no resting background.
    Ghost,
    /// Destructive action.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl StyleToken for ButtonVariant {
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 hover:bg-blue-700 dark:bg-blue-500 dark:hover:bg-blue-600 text-white focus:ring-blue-500",
            Self::Secondary => "bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-900 dark:text-gray-100 focus:ring-gray-500",
            Self::Outline => "border border-gray-300 dark:border-gray-600 bg-transparent hover:bg-gray-50 dark:hover:bg-gray-800 text-gray-700 dark:text-gray-300 focus:ring-gray-500",
            Self::Ghost => "bg-transparent hover:bg-gray-100 dark:hover:bg-gray-800 text-gray-700 dark:text-gray-300 focus:ring-gray-500",
            Self::Danger => "bg-red-600 hover:bg-red-700 dark:bg-red-500 dark:hover:bg-red-600 text-white focus:ring-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for ButtonSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm gap-1.5",
            Self::Md => "px-4 py-2 text-sm gap-2",
            Self::Lg => "px-6 py-3 text-base gap-2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card surface variants.
pub enum CardVariant {
    /// Thin border with a soft shadow.
    Default,
    /// Heavier border, no shadow.
    Bordered,
    /// Borderless raised surface.
    Elevated,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleToken for CardVariant {
    const ALL: &'static [Self] = &[Self::Default, Self::Bordered, Self::Elevated];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bordered => "bordered",
            Self::Elevated => "elevated",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 shadow-sm",
            Self::Bordered => "bg-white dark:bg-gray-800 border-2 border-gray-300 dark:border-gray-600",
            Self::Elevated => "bg-white dark:bg-gray-800 shadow-lg dark:shadow-gray-900/50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card padding tokens.
pub enum CardPadding {
    /// No padding, for edge-to-edge content.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for CardPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for CardPadding {
    const ALL: &'static [Self] = &[Self::None, Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::None => "p-0",
            Self::Sm => "p-3",
            Self::Md => "p-6",
            Self::Lg => "p-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Validation state of an input field.
pub enum InputState {
    /// Neutral field.
    Default,
    /// Field with a validation error.
    Error,
    /// Field that passed validation.
    Success,
}

impl Default for InputState {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleToken for InputState {
    const ALL: &'static [Self] = &[Self::Default, Self::Error, Self::Success];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "border-gray-300 dark:border-gray-600 focus:border-blue-500 focus:ring-blue-500",
            Self::Error => "border-red-500 dark:border-red-400 focus:border-red-500 focus:ring-red-500",
            Self::Success => "border-green-500 dark:border-green-400 focus:border-green-500 focus:ring-green-500",
        }
    }
}

impl InputState {
    /// Text color of the helper/error line under the field.
    pub fn message_classes(self) -> &'static str {
        match self {
            Self::Default => "text-gray-500 dark:text-gray-400",
            Self::Error => "text-red-600 dark:text-red-400",
            Self::Success => "text-green-600 dark:text-green-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input sizing tokens.
pub enum InputSize {
    /// Dense field.
    Sm,
    /// Default field.
    Md,
    /// Large field.
    Lg,
}

impl Default for InputSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for InputSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-2.5 py-1.5 text-sm",
            Self::Md => "px-3 py-2 text-sm",
            Self::Lg => "px-4 py-3 text-base",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spinner ring colors.
pub enum SpinnerVariant {
    /// Brand blue ring.
    Primary,
    /// Neutral gray ring.
    Secondary,
    /// White ring for use on solid backgrounds.
    White,
}

impl Default for SpinnerVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl StyleToken for SpinnerVariant {
    const ALL: &'static [Self] = &[Self::Primary, Self::Secondary, Self::White];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::White => "white",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Primary => "border-blue-600 dark:border-blue-400",
            Self::Secondary => "border-gray-600 dark:border-gray-300",
            Self::White => "border-white dark:border-white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spinner sizing tokens.
pub enum SpinnerSize {
    /// Inline spinner sized for text and buttons.
    Sm,
    /// Default spinner.
    Md,
    /// Page-level spinner.
    Lg,
}

impl Default for SpinnerSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for SpinnerSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4 border-2",
            Self::Md => "h-8 w-8 border-2",
            Self::Lg => "h-12 w-12 border-4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Modal panel width tokens.
pub enum ModalSize {
    /// Narrow confirmation dialog.
    Sm,
    /// Default dialog.
    Md,
    /// Wide dialog.
    Lg,
    /// Extra-wide dialog for forms and tables.
    Xl,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for ModalSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "max-w-sm",
            Self::Md => "max-w-lg",
            Self::Lg => "max-w-2xl",
            Self::Xl => "max-w-4xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Progress track height tokens.
pub enum ProgressSize {
    /// Hairline track.
    Sm,
    /// Default track.
    Md,
    /// Thick track.
    Lg,
}

impl Default for ProgressSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleToken for ProgressSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-1",
            Self::Md => "h-2",
            Self::Lg => "h-4",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
