use super::*;

const SPINNER_BASE: &str = "inline-block animate-spin rounded-full border-solid border-t-transparent";
const PROGRESS_TRACK_BASE: &str = "w-full overflow-hidden rounded-full bg-gray-200 dark:bg-gray-700";
const PROGRESS_FILL_BASE: &str = "h-full rounded-full transition-all duration-300";
const PROGRESS_LABEL: &str = "mb-1 flex justify-between text-sm font-medium text-gray-700 dark:text-gray-300";

/// Resolve the spinner ring class descriptor.
pub fn spinner_class(variant: SpinnerVariant, size: SpinnerSize, class: Option<&str>) -> String {
    resolve_style(SPINNER_BASE, variant, size, class)
}

/// Resolve the progress track class descriptor.
pub fn progress_track_class(size: ProgressSize, class: Option<&str>) -> String {
    ClassList::new()
        .push(PROGRESS_TRACK_BASE)
        .push_token(size)
        .push_extension(class)
        .build()
}

/// Resolve the progress fill class descriptor.
pub fn progress_fill_class(variant: StatusVariant) -> String {
    ClassList::new()
        .push(PROGRESS_FILL_BASE)
        .push(variant.fill_classes())
        .build()
}

/// Completion percentage of `value` against `max`, clamped to `0..=100`.
///
/// A zero `max` reports 0.
pub fn progress_percent(value: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let percent = (u64::from(value.min(max)) * 100) / u64::from(max);
    percent as u8
}

#[component]
/// Indeterminate loading indicator.
pub fn LoadingSpinner(
    #[prop(optional)] variant: SpinnerVariant,
    #[prop(optional)] size: SpinnerSize,
    /// Accessible label announced to screen readers.
    #[prop(optional, into)]
    label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading".to_string());

    view! {
        <span
            class="inline-flex items-center"
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            <span class=spinner_class(variant, size, class.as_deref()) aria-hidden="true"></span>
            <span class="sr-only">{label}</span>
        </span>
    }
}

#[component]
/// Determinate progress bar. The caller owns and drives `value`.
pub fn ProgressBar(
    #[prop(into)] value: MaybeSignal<u32>,
    #[prop(default = 100)] max: u32,
    #[prop(optional)] variant: StatusVariant,
    #[prop(optional)] size: ProgressSize,
    /// Render the label row with the percentage.
    #[prop(optional)]
    show_label: bool,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let percent = move || {
        let raw = value.get();
        if raw > max {
            logging::debug_warn!("progress value {raw} exceeds max {max}; clamping");
        }
        progress_percent(raw, max)
    };

    view! {
        <div data-ui-primitive="true" data-ui-kind="progress">
            {show_label.then(|| {
                view! {
                    <div class=PROGRESS_LABEL data-ui-slot="label">
                        <span>{label.unwrap_or_default()}</span>
                        <span>{move || format!("{}%", percent())}</span>
                    </div>
                }
            })}
            <div
                class=progress_track_class(size, class.as_deref())
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax=max
                aria-valuenow=move || value.get().min(max)
                data-ui-variant=variant.token()
                data-ui-size=size.token()
            >
                <div
                    class=progress_fill_class(variant)
                    style=move || format!("width: {}%", percent())
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn percent_is_clamped_and_handles_zero_max() {
        assert_eq!(progress_percent(0, 100), 0);
        assert_eq!(progress_percent(45, 100), 45);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(250, 100), 100);
        assert_eq!(progress_percent(10, 0), 0);
        assert_eq!(progress_percent(u32::MAX, u32::MAX), 100);
    }

    #[test]
    fn progress_fill_follows_status_variant() {
        assert_eq!(
            progress_fill_class(StatusVariant::Danger),
            "h-full rounded-full transition-all duration-300 bg-red-600 dark:bg-red-500"
        );
    }

    #[test]
    fn progress_track_appends_extension_after_height() {
        assert_eq!(
            progress_track_class(ProgressSize::Lg, Some("my-2")),
            format!("{PROGRESS_TRACK_BASE} h-4 my-2")
        );
    }

    #[test]
    fn spinner_combinations_resolve() {
        for variant in SpinnerVariant::ALL {
            for size in SpinnerSize::ALL {
                let class = spinner_class(*variant, *size, None);
                assert!(class.starts_with(SPINNER_BASE));
                assert!(class.ends_with(size.classes()));
            }
        }
    }
}
