//! Presentational UI primitives for the Agent-NN web front-end.
//!
//! Every primitive is a stateless Leptos component that maps a closed set of
//! variant and size options to a fixed Tailwind class descriptor. The pure
//! `*_class` resolvers are exported next to the components so callers and
//! tests can inspect the exact descriptor a primitive will render.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
pub mod style;

pub use primitives::{
    badge_class, button_class, card_class, input_class, input_message_class, modal_overlay_class,
    modal_panel_class, progress_fill_class, progress_percent, progress_track_class,
    spinner_class, Badge, BadgeSize, Button, ButtonSize, ButtonVariant, Card, CardPadding,
    CardVariant, Input, InputSize, InputState, LoadingSpinner, Modal, ModalSize, ProgressBar,
    ProgressSize, SpinnerSize, SpinnerVariant, StatusVariant,
};
pub use style::{resolve_style, ClassList, StyleToken};

/// Convenience imports for crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        Badge, BadgeSize, Button, ButtonSize, ButtonVariant, Card, CardPadding, CardVariant,
        Input, InputSize, InputState, LoadingSpinner, Modal, ModalSize, ProgressBar,
        ProgressSize, SpinnerSize, SpinnerVariant, StatusVariant, StyleToken,
    };
}
