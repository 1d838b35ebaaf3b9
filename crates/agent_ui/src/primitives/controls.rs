use super::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 dark:focus:ring-offset-gray-900 disabled:opacity-50 disabled:cursor-not-allowed";
const INPUT_BASE: &str = "block w-full rounded-lg border bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100 placeholder-gray-400 dark:placeholder-gray-500 focus:outline-none focus:ring-2 disabled:opacity-50 disabled:cursor-not-allowed";
const INPUT_WRAPPER: &str = "w-full";
const INPUT_LABEL: &str = "block mb-1 text-sm font-medium text-gray-700 dark:text-gray-300";
const INPUT_MESSAGE: &str = "mt-1 text-sm";

/// Resolve the button class descriptor.
///
/// `full_width` adds `w-full` ahead of the caller extension.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    class: Option<&str>,
) -> String {
    ClassList::new()
        .push(BUTTON_BASE)
        .push_token(variant)
        .push_token(size)
        .push_if(full_width, "w-full")
        .push_extension(class)
        .build()
}

/// Resolve the input field class descriptor.
pub fn input_class(state: InputState, size: InputSize, class: Option<&str>) -> String {
    resolve_style(INPUT_BASE, state, size, class)
}

/// Resolve the helper/error line classes for an input state.
pub fn input_message_class(state: InputState) -> String {
    ClassList::new()
        .push(INPUT_MESSAGE)
        .push(state.message_classes())
        .build()
}

fn input_state(state: InputState, error: Option<&str>) -> InputState {
    match error {
        Some(message) if !message.trim().is_empty() => InputState::Error,
        _ => state,
    }
}

#[component]
/// Action button with variant, size, and loading states.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Stretch to the container width.
    #[prop(optional)]
    full_width: bool,
    /// HTML button type. Defaults to `button`.
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Show an inline spinner and block interaction.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let spinner_variant = match variant {
        ButtonVariant::Primary | ButtonVariant::Danger => SpinnerVariant::White,
        _ => SpinnerVariant::Secondary,
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=button_class(variant, size, full_width, class.as_deref())
            aria-label=aria_label
            aria-busy=move || bool_token(loading.get())
            disabled=move || disabled.get() || loading.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if loading.get() { "loading" } else { "idle" }
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get() fallback=|| ()>
                <LoadingSpinner size=SpinnerSize::Sm variant=spinner_variant />
            </Show>
            {children.map(|children| children())}
        </button>
    }
}

#[component]
/// Labelled text input with helper and error messaging.
pub fn Input(
    #[prop(optional)] state: InputState,
    #[prop(optional)] size: InputSize,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    /// HTML input type. Defaults to `text`.
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    /// Error message. A non-blank message forces the error state.
    #[prop(optional, into)]
    error: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let state = input_state(state, error.as_deref());
    let has_error = state == InputState::Error;
    let message = error
        .filter(|message| !message.trim().is_empty())
        .or(helper_text);

    view! {
        <div class=INPUT_WRAPPER data-ui-primitive="true" data-ui-kind="input-field">
            {label.map(|label| {
                view! {
                    <label class=INPUT_LABEL for=id.clone()>
                        {label}
                    </label>
                }
            })}
            <input
                class=input_class(state, size, class.as_deref())
                id=id
                name=name
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=bool_token(has_error)
                data-ui-primitive="true"
                data-ui-kind="input"
                data-ui-variant=state.token()
                data-ui-size=size.token()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
            />
            {message.map(|message| {
                view! {
                    <p class=input_message_class(state) data-ui-slot="message">
                        {message}
                    </p>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn button_defaults_resolve_primary_md() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), false, None);
        assert_eq!(
            class,
            format!(
                "{BUTTON_BASE} {} {}",
                ButtonVariant::Primary.classes(),
                ButtonSize::Md.classes()
            )
        );
    }

    #[test]
    fn full_width_precedes_extension() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::Lg, true, Some("mt-4"));
        assert!(class.ends_with("px-6 py-3 text-base gap-2 w-full mt-4"));
    }

    #[test]
    fn button_extension_is_last_for_every_combination() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                for full_width in [false, true] {
                    let class = button_class(*variant, *size, full_width, Some("ml-2"));
                    assert!(class.ends_with(" ml-2"), "{class}");
                }
            }
        }
    }

    #[test]
    fn error_message_forces_error_state() {
        assert_eq!(
            input_state(InputState::Success, Some("required")),
            InputState::Error
        );
        assert_eq!(input_state(InputState::Success, Some("  ")), InputState::Success);
        assert_eq!(input_state(InputState::Default, None), InputState::Default);
    }

    #[test]
    fn error_input_uses_error_borders_and_message_colors() {
        let state = input_state(InputState::Default, Some("Name is required"));
        let class = input_class(state, InputSize::Sm, None);
        assert!(class.contains("border-red-500 dark:border-red-400"));
        assert!(class.ends_with("px-2.5 py-1.5 text-sm"));
        assert_eq!(
            input_message_class(state),
            "mt-1 text-sm text-red-600 dark:text-red-400"
        );
    }

    #[test]
    fn icon_only_button_needs_no_content() {
        let _button = ButtonProps::builder()
            .variant(ButtonVariant::Ghost)
            .aria_label("Close")
            .build();
    }
}
