use super::*;

const MODAL_OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 dark:bg-black/70";
const MODAL_PANEL_BASE: &str = "relative w-full rounded-lg bg-white dark:bg-gray-800 shadow-xl";
const MODAL_HEADER: &str = "flex items-center justify-between px-6 pt-6";
const MODAL_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-gray-100";
const MODAL_BODY: &str = "p-6";

/// Resolve the modal backdrop class descriptor.
pub fn modal_overlay_class() -> String {
    MODAL_OVERLAY.to_string()
}

/// Resolve the modal panel class descriptor.
pub fn modal_panel_class(size: ModalSize, class: Option<&str>) -> String {
    ClassList::new()
        .push(MODAL_PANEL_BASE)
        .push_token(size)
        .push_extension(class)
        .build()
}

#[component]
/// Dialog overlay. Visibility is owned by the caller through `open`.
///
/// `on_close` fires for the close button, Escape, and (unless disabled)
/// backdrop clicks. The modal never closes itself.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] size: ModalSize,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(default = true)] close_on_backdrop: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let panel_class = modal_panel_class(size, class.as_deref());
    let request_close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            request_close();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=modal_overlay_class()
                data-ui-primitive="true"
                data-ui-kind="modal-overlay"
                on:click=move |_| {
                    if close_on_backdrop {
                        request_close();
                    }
                }
            >
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.clone()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-size=size.token()
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <div class=MODAL_HEADER data-ui-slot="header">
                        <h2 class=MODAL_TITLE>{title.clone()}</h2>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            aria_label="Close dialog"
                            on_click=Callback::new(move |_| request_close())
                        >
                            "\u{00d7}"
                        </Button>
                    </div>
                    <div class=MODAL_BODY data-ui-slot="body">{children.as_ref().map(|children| children())}</div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn modal_panel_width_follows_size() {
        assert_eq!(
            modal_panel_class(ModalSize::default(), None),
            format!("{MODAL_PANEL_BASE} max-w-lg")
        );
        assert_eq!(
            modal_panel_class(ModalSize::Xl, Some("max-h-screen")),
            format!("{MODAL_PANEL_BASE} max-w-4xl max-h-screen")
        );
    }

    #[test]
    fn overlay_covers_viewport_with_dark_mode_scrim() {
        let class = modal_overlay_class();
        assert!(class.starts_with("fixed inset-0"));
        assert!(class.contains("dark:bg-black/70"));
    }

    #[test]
    fn modal_accepts_missing_content() {
        let _modal = ModalProps::builder()
            .open(false)
            .title("Confirm")
            .size(ModalSize::Sm)
            .build();
    }
}
