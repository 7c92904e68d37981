//! The four-step authoring form.

use dioxus::prelude::*;
use invites_core::{
    AnimationSpeed, BackgroundTheme, DateType, ResponseKind, Tone, INVITATION_EXAMPLES,
    LOCATION_EXAMPLES, OPENING_LINE_EXAMPLES, TRAITS_EXAMPLES, VULNERABILITY_EXAMPLES,
};

use crate::state::{EditorScreen, EditorState, WIZARD_STEPS};

#[component]
pub fn WizardScreen(mut state: Signal<EditorState>) -> Element {
    let step = state.read().wizard_step;
    let mut validation_error: Signal<Option<String>> = use_signal(|| None);

    let progress = (step as f64 / WIZARD_STEPS as f64) * 100.0;

    rsx! {
        div {
            class: "wizard-page",

            button {
                class: "back-link",
                onclick: move |_| {
                    state.write().screen = EditorScreen::Home;
                },
                "← Back to Home"
            }

            div {
                class: "wizard-card",

                div {
                    class: "progress-bar",
                    div {
                        class: "progress-fill",
                        style: "width: {progress}%;",
                    }
                }

                h1 { class: "wizard-title", "Create Your Invitation" }
                p { class: "step-indicator", "Step {step} of {WIZARD_STEPS}" }

                match step {
                    1 => rsx! { StepBasics { state } },
                    2 => rsx! { StepMessage { state } },
                    3 => rsx! { StepDetails { state } },
                    _ => rsx! { StepTouches { state } },
                }

                if let Some(err) = validation_error() {
                    p { class: "form-error", "{err}" }
                }

                div {
                    class: "wizard-nav",

                    if step > 1 {
                        button {
                            class: "btn-secondary",
                            onclick: move |_| {
                                let mut s = state.write();
                                if s.wizard_step > 1 {
                                    s.wizard_step -= 1;
                                }
                            },
                            "← Previous"
                        }
                    }

                    if step < WIZARD_STEPS {
                        button {
                            class: "btn-primary",
                            onclick: move |_| {
                                let mut s = state.write();
                                if s.wizard_step < WIZARD_STEPS {
                                    s.wizard_step += 1;
                                }
                            },
                            "Next →"
                        }
                    } else {
                        button {
                            class: "btn-primary",
                            onclick: move |_| {
                                let result = state.read().draft.finalize();
                                match result {
                                    Ok(_) => {
                                        validation_error.set(None);
                                        state.write().start_preview();
                                    }
                                    Err(e) => {
                                        validation_error.set(Some(e.to_string()));
                                    }
                                }
                            },
                            "Preview Invitation ✨"
                        }
                    }
                }
            }
        }
    }
}

/// Row of tappable example chips below a text field.
#[component]
fn ExampleChips(examples: &'static [&'static str], on_pick: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "examples",
            for example in examples.iter().copied() {
                button {
                    class: "example-chip",
                    onclick: move |_| on_pick.call(example.to_string()),
                    "{example}"
                }
            }
        }
    }
}

/// Step 1: names.
#[component]
fn StepBasics(mut state: Signal<EditorState>) -> Element {
    rsx! {
        div {
            class: "step-content",
            h2 { class: "step-title", "👋 Getting Started" }

            div {
                class: "form-group",
                label { "Receiver's Name (optional)" }
                input {
                    r#type: "text",
                    placeholder: "Who is this invitation for?",
                    value: "{state.read().draft.receiver_name}",
                    oninput: move |evt| {
                        state.write().draft.receiver_name = evt.value();
                    },
                }
            }

            div {
                class: "form-group",
                label { "Your Name (optional)" }
                input {
                    r#type: "text",
                    placeholder: "Leave blank to keep it mysterious...",
                    value: "{state.read().draft.sender_name}",
                    oninput: move |evt| {
                        state.write().draft.sender_name = evt.value();
                    },
                }
            }

            div {
                class: "form-group",
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: state.read().draft.is_anonymous,
                        onchange: move |evt| {
                            state.write().draft.is_anonymous = evt.checked();
                        },
                    }
                    "Stay anonymous until they respond"
                }
            }
        }
    }
}

/// Step 2: the message itself.
#[component]
fn StepMessage(mut state: Signal<EditorState>) -> Element {
    let date_type = state.read().draft.date_type;

    rsx! {
        div {
            class: "step-content",
            h2 { class: "step-title", "✍️ Your Message" }

            div {
                class: "form-group",
                label { "Opening Line" }
                input {
                    r#type: "text",
                    placeholder: "Simple, friendly, low-pressure...",
                    value: "{state.read().draft.opening_line}",
                    oninput: move |evt| {
                        state.write().draft.opening_line = evt.value();
                    },
                }
                ExampleChips {
                    examples: &OPENING_LINE_EXAMPLES[..],
                    on_pick: move |example| {
                        state.write().draft.opening_line = example;
                    },
                }
            }

            div {
                class: "form-group",
                label { "What do you like about them?" }
                input {
                    r#type: "text",
                    placeholder: "e.g., kind, fun, and easy to smile around",
                    value: "{state.read().draft.traits}",
                    oninput: move |evt| {
                        state.write().draft.traits = evt.value();
                    },
                }
                ExampleChips {
                    examples: &TRAITS_EXAMPLES[..],
                    on_pick: move |example| {
                        state.write().draft.traits = example;
                    },
                }
            }

            div {
                class: "form-group",
                label { "Vulnerability Line (optional but recommended)" }
                input {
                    r#type: "text",
                    placeholder: "Keeps it human and sincere...",
                    value: "{state.read().draft.vulnerability_line}",
                    oninput: move |evt| {
                        state.write().draft.vulnerability_line = evt.value();
                    },
                }
                ExampleChips {
                    examples: &VULNERABILITY_EXAMPLES[..],
                    on_pick: move |example| {
                        state.write().draft.vulnerability_line = example;
                    },
                }
            }

            div {
                class: "form-group",
                label { "Type of Date" }
                div {
                    class: "option-grid",
                    for preset in DateType::presets().iter().copied() {
                        button {
                            class: if date_type == preset { "option-card selected" } else { "option-card" },
                            onclick: move |_| {
                                state.write().draft.date_type = preset;
                            },
                            "{preset.display_name()}"
                        }
                    }
                    button {
                        class: if date_type == DateType::Custom { "option-card selected" } else { "option-card" },
                        onclick: move |_| {
                            state.write().draft.date_type = DateType::Custom;
                        },
                        "Custom"
                    }
                }
            }

            if date_type == DateType::Custom {
                div {
                    class: "form-group",
                    input {
                        r#type: "text",
                        placeholder: "Describe your custom date idea...",
                        value: "{state.read().draft.custom_date_type}",
                        oninput: move |evt| {
                            state.write().draft.custom_date_type = evt.value();
                        },
                    }
                }
            }

            div {
                class: "form-group",
                label { "Main Invitation" }
                input {
                    r#type: "text",
                    placeholder: "Clear and straightforward...",
                    value: "{state.read().draft.invitation_sentence}",
                    oninput: move |evt| {
                        state.write().draft.invitation_sentence = evt.value();
                    },
                }
                ExampleChips {
                    examples: &INVITATION_EXAMPLES[..],
                    on_pick: move |example| {
                        state.write().draft.invitation_sentence = example;
                    },
                }
            }
        }
    }
}

/// Step 3: date details and response options.
#[component]
fn StepDetails(mut state: Signal<EditorState>) -> Element {
    rsx! {
        div {
            class: "step-content",
            h2 { class: "step-title", "📅 Date Details" }

            div {
                class: "form-row",
                div {
                    class: "form-group",
                    label { "Date" }
                    input {
                        r#type: "date",
                        value: "{state.read().draft.date}",
                        oninput: move |evt| {
                            state.write().draft.date = evt.value();
                        },
                    }
                }
                div {
                    class: "form-group",
                    label { "Time" }
                    input {
                        r#type: "time",
                        value: "{state.read().draft.time}",
                        oninput: move |evt| {
                            state.write().draft.time = evt.value();
                        },
                    }
                }
            }

            div {
                class: "form-group",
                label { "Location" }
                input {
                    r#type: "text",
                    placeholder: "Where should they meet you?",
                    value: "{state.read().draft.location}",
                    oninput: move |evt| {
                        state.write().draft.location = evt.value();
                    },
                }
                ExampleChips {
                    examples: &LOCATION_EXAMPLES[..],
                    on_pick: move |example| {
                        state.write().draft.location = example;
                    },
                }
            }

            h2 { class: "step-title section-gap", "💬 Response Options" }

            for kind in ResponseKind::all() {
                ResponseOptionEditor { state, kind }
            }
        }
    }
}

/// Label and follow-up editors for one response kind.
#[component]
fn ResponseOptionEditor(mut state: Signal<EditorState>, kind: ResponseKind) -> Element {
    let option = state.read().draft.response_options.get(kind).clone();
    let title = match kind {
        ResponseKind::Yes => "Yes Response",
        ResponseKind::Maybe => "Maybe Response",
        ResponseKind::No => "No Response",
    };

    rsx! {
        div {
            class: "response-option",
            div {
                class: "response-option-header",
                h3 { class: "response-title", "{title}" }
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: option.enabled,
                        onchange: move |evt| {
                            state.write().draft.response_options.get_mut(kind).enabled =
                                evt.checked();
                        },
                    }
                    "Offer this option"
                }
            }
            div {
                class: "form-group",
                label { "Button Label" }
                input {
                    r#type: "text",
                    value: "{option.label}",
                    oninput: move |evt| {
                        state.write().draft.response_options.get_mut(kind).label = evt.value();
                    },
                }
            }
            div {
                class: "form-group",
                label { "Follow-up Message" }
                textarea {
                    rows: 2,
                    value: "{option.follow_up}",
                    oninput: move |evt| {
                        state.write().draft.response_options.get_mut(kind).follow_up =
                            evt.value();
                    },
                }
            }
        }
    }
}

/// Step 4: presentation and final touches.
#[component]
fn StepTouches(mut state: Signal<EditorState>) -> Element {
    let background = state.read().draft.background_theme;
    let tone = state.read().draft.tone;
    let speed = state.read().draft.animation_speed;
    let enable_music = state.read().draft.enable_music;

    rsx! {
        div {
            class: "step-content",
            h2 { class: "step-title", "✨ Final Touches" }

            div {
                class: "form-group",
                label { "Background Theme" }
                div {
                    class: "option-grid",
                    for (value, name) in [
                        (BackgroundTheme::Gradient, "Gradient"),
                        (BackgroundTheme::Solid, "Solid"),
                        (BackgroundTheme::Pattern, "Pattern"),
                    ] {
                        button {
                            class: if background == value { "option-card selected" } else { "option-card" },
                            onclick: move |_| {
                                state.write().draft.background_theme = value;
                            },
                            "{name}"
                        }
                    }
                }
            }

            div {
                class: "form-group",
                label { "Tone" }
                div {
                    class: "option-grid",
                    for value in Tone::all().iter().copied() {
                        button {
                            class: if tone == value { "option-card selected" } else { "option-card" },
                            onclick: move |_| {
                                state.write().draft.tone = value;
                            },
                            "{value.display_name()}"
                        }
                    }
                }
            }

            div {
                class: "form-group",
                label { "Accent Color" }
                input {
                    r#type: "color",
                    value: "{state.read().draft.color_theme}",
                    oninput: move |evt| {
                        state.write().draft.color_theme = evt.value();
                    },
                }
            }

            div {
                class: "form-group",
                label { "Animation Speed" }
                div {
                    class: "option-grid",
                    for (value, name) in [
                        (AnimationSpeed::Slow, "Slow"),
                        (AnimationSpeed::Medium, "Medium"),
                        (AnimationSpeed::Fast, "Fast"),
                    ] {
                        button {
                            class: if speed == value { "option-card selected" } else { "option-card" },
                            onclick: move |_| {
                                state.write().draft.animation_speed = value;
                            },
                            "{name}"
                        }
                    }
                }
            }

            div {
                class: "form-group",
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: enable_music,
                        onchange: move |evt| {
                            state.write().draft.enable_music = evt.checked();
                        },
                    }
                    "Enable soft background music"
                }
            }

            if enable_music {
                div {
                    class: "form-group",
                    label { "YouTube link for the music" }
                    input {
                        r#type: "text",
                        placeholder: "https://www.youtube.com/watch?v=...",
                        value: "{state.read().draft.youtube_link}",
                        oninput: move |evt| {
                            state.write().draft.youtube_link = evt.value();
                        },
                    }
                }
            }

            div {
                class: "preview-note",
                p {
                    "🎉 You're all set! Click below to preview your invitation exactly "
                    "as your special someone will see it."
                }
            }
        }
    }
}
