//! Reusable, lifetime-free Dioxus components for the Pico.css framework.
//! The stylesheet itself is linked once at the application root.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A card for grouping related content. Wraps content in an `<article>`.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = vec![match props.button_type {
        ButtonType::Primary => "",
        ButtonType::Secondary => "secondary",
        ButtonType::Contrast => "contrast",
    }];
    if props.outline {
        classes.push("outline");
    }
    let class_str = classes.join(" ");

    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = String::new())]
    value: String,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A labeled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SwitchProps {
    label: String,
    checked: Signal<bool>,
}

/// A Pico `role="switch"` checkbox bound directly to a boolean signal, so
/// any other reader of the signal follows the toggle.
pub fn Switch(mut props: SwitchProps) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                role: "switch",
                checked: (props.checked)(),
                oninput: move |evt| props.checked.set(evt.value() == "true"),
            }
            "{props.label}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

/// A titled dialog with a close affordance in its header.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |_| props.is_open.set(false),
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
