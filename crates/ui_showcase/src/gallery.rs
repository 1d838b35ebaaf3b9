use agent_ui::prelude::*;
use leptos::*;
use leptos_meta::*;

const SECTION_TITLE: &str = "mb-3 text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400";
const ROW: &str = "flex flex-wrap items-center gap-3";

/// Capitalize an option token for display (`success` -> `Success`).
pub fn token_label(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="mb-8">
            <h2 class=SECTION_TITLE>{title}</h2>
            {children()}
        </section>
    }
}

#[component]
/// Gallery root with a dark-mode toggle.
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();

    let dark = create_rw_signal(false);
    let modal_open = create_rw_signal(false);
    let saving = create_rw_signal(false);
    let progress = create_rw_signal(40u32);
    let agent_name = create_rw_signal(String::new());

    let name_error = move || {
        let name = agent_name.get();
        (!name.is_empty() && name.len() < 3).then(|| "Use at least 3 characters".to_string())
    };

    view! {
        <Title text="Agent-NN UI primitives" />
        <div class=move || if dark.get() { "dark" } else { "" }>
            <main class="min-h-screen bg-gray-50 p-8 text-gray-900 dark:bg-gray-900 dark:text-gray-100">
                <header class="mb-8 flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"Agent-NN UI primitives"</h1>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| dark.update(|value| *value = !*value))
                    >
                        {move || if dark.get() { "Light mode" } else { "Dark mode" }}
                    </Button>
                </header>

                <Section title="Badges">
                    {BadgeSize::ALL
                        .iter()
                        .map(|size| {
                            view! {
                                <div class=format!("{ROW} mb-2")>
                                    {StatusVariant::ALL
                                        .iter()
                                        .map(|variant| {
                                            view! {
                                                <Badge variant=*variant size=*size>
                                                    {token_label(variant.token())}
                                                </Badge>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </Section>

                <Section title="Buttons">
                    <div class=format!("{ROW} mb-2")>
                        {ButtonVariant::ALL
                            .iter()
                            .map(|variant| {
                                view! { <Button variant=*variant>{token_label(variant.token())}</Button> }
                            })
                            .collect_view()}
                    </div>
                    <div class=ROW>
                        {ButtonSize::ALL
                            .iter()
                            .map(|size| {
                                view! { <Button size=*size>{format!("Size {}", size.token())}</Button> }
                            })
                            .collect_view()}
                        <Button
                            loading=saving
                            on_click=Callback::new(move |_| saving.set(true))
                        >
                            "Save agent"
                        </Button>
                        <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| saving.set(false))>
                            "Reset"
                        </Button>
                    </div>
                </Section>

                <Section title="Cards">
                    <div class="grid gap-4 md:grid-cols-3">
                        {CardVariant::ALL
                            .iter()
                            .map(|variant| {
                                view! {
                                    <Card
                                        variant=*variant
                                        title=token_label(variant.token())
                                        subtitle="Worker agent"
                                        footer=|| view! { <Badge variant=StatusVariant::Success size=BadgeSize::Sm>"online"</Badge> }
                                    >
                                        <p class="text-sm">"Handles retrieval tasks for the docs domain."</p>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </Section>

                <Section title="Inputs">
                    <div class="grid gap-4 md:grid-cols-3">
                        <Input
                            id="agent-name"
                            label="Agent name"
                            placeholder="docs-worker"
                            helper_text="Lowercase, dashes allowed"
                            value=agent_name
                            on_input=Callback::new(move |ev| agent_name.set(event_target_value(&ev)))
                        />
                        {move || {
                            name_error()
                                .map(|error| {
                                    view! { <Input label="Validation" state=InputState::Default error=error /> }
                                })
                        }}
                        <Input label="Accepted" state=InputState::Success helper_text="Name is available" />
                        <Input label="Disabled" size=InputSize::Lg disabled=true placeholder="Read only" />
                    </div>
                </Section>

                <Section title="Spinners">
                    <div class=ROW>
                        {SpinnerSize::ALL
                            .iter()
                            .map(|size| view! { <LoadingSpinner size=*size /> })
                            .collect_view()}
                        <span class="rounded bg-blue-600 p-2">
                            <LoadingSpinner variant=SpinnerVariant::White size=SpinnerSize::Sm label="Syncing" />
                        </span>
                    </div>
                </Section>

                <Section title="Progress">
                    <div class="space-y-3">
                        {StatusVariant::ALL
                            .iter()
                            .map(|variant| {
                                view! {
                                    <ProgressBar
                                        value=progress
                                        variant=*variant
                                        show_label=true
                                        label=token_label(variant.token())
                                    />
                                }
                            })
                            .collect_view()}
                        <div class=ROW>
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| progress.update(|value| *value = value.saturating_sub(10)))
                            >
                                "-10"
                            </Button>
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| progress.update(|value| *value = (*value + 10).min(100)))
                            >
                                "+10"
                            </Button>
                        </div>
                    </div>
                </Section>

                <Section title="Modal">
                    <Button on_click=Callback::new(move |_| modal_open.set(true))>"Open modal"</Button>
                    <Modal
                        open=modal_open
                        title="Delete agent"
                        size=ModalSize::Sm
                        on_close=Callback::new(move |_| modal_open.set(false))
                    >
                        <p class="mb-4 text-sm">"This removes the agent and its session history."</p>
                        <div class="flex justify-end gap-2">
                            <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| modal_open.set(false))>
                                "Cancel"
                            </Button>
                            <Button variant=ButtonVariant::Danger on_click=Callback::new(move |_| modal_open.set(false))>
                                "Delete"
                            </Button>
                        </div>
                    </Modal>
                </Section>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn token_labels_capitalize_first_letter() {
        assert_eq!(token_label("success"), "Success");
        assert_eq!(token_label("md"), "Md");
        assert_eq!(token_label(""), "");
    }

    #[test]
    fn every_status_variant_has_a_distinct_label() {
        let labels: Vec<_> = StatusVariant::ALL
            .iter()
            .map(|variant| token_label(variant.token()))
            .collect();
        assert_eq!(labels, ["Default", "Success", "Warning", "Danger", "Info"]);
    }
}
