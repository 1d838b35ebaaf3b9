use super::*;

const BADGE_BASE: &str = "inline-flex items-center font-medium rounded-full border";
const CARD_BASE: &str = "rounded-lg overflow-hidden";
const CARD_HEADER: &str = "mb-4";
const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-gray-100";
const CARD_SUBTITLE: &str = "mt-1 text-sm text-gray-500 dark:text-gray-400";
const CARD_FOOTER: &str = "mt-4 pt-4 border-t border-gray-200 dark:border-gray-700";

/// Resolve the badge class descriptor.
pub fn badge_class(variant: StatusVariant, size: BadgeSize, class: Option<&str>) -> String {
    resolve_style(BADGE_BASE, variant, size, class)
}

/// Resolve the card container class descriptor.
pub fn card_class(variant: CardVariant, padding: CardPadding, class: Option<&str>) -> String {
    resolve_style(CARD_BASE, variant, padding, class)
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(optional)] variant: StatusVariant,
    #[prop(optional)] size: BadgeSize,
    /// Extra classes appended after the resolved descriptor.
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <span
            class=badge_class(variant, size, class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {children.map(|children| children())}
        </span>
    }
}

#[component]
/// Card surface with optional header and footer regions.
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    /// Header title. The header region is omitted when neither title nor subtitle is set.
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Footer content rendered below a divider.
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let has_header = title.is_some() || subtitle.is_some();

    view! {
        <article
            class=card_class(variant, padding, class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
        >
            {has_header.then(|| {
                view! {
                    <header class=CARD_HEADER data-ui-slot="header">
                        {title.map(|title| view! { <h3 class=CARD_TITLE>{title}</h3> })}
                        {subtitle.map(|subtitle| view! { <p class=CARD_SUBTITLE>{subtitle}</p> })}
                    </header>
                }
            })}
            <div data-ui-slot="body">{children.map(|children| children())}</div>
            {footer.map(|footer| {
                view! {
                    <footer class=CARD_FOOTER data-ui-slot="footer">
                        {footer.run()}
                    </footer>
                }
            })}
        </article>
    }
}
