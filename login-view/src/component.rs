use crate::login::{LoginView, LoginViewOptions};
use crate::mediator::Mediator;
use crate::models::FormField;
use crate::provider::ServiceProviderRegistry;
use crate::view::View;
use dioxus::prelude::*;

/// Props for the LoginDialog
#[derive(Props, Clone, PartialEq)]
pub struct LoginDialogProps {
    /// Providers offered in the dialog, one button each
    pub service_providers: ServiceProviderRegistry,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<LoginLabels>,
}

/// Custom labels for the login dialog
#[derive(Clone, PartialEq, Debug)]
pub struct LoginLabels {
    pub title: String,
    pub intro: String,
    pub email: String,
    pub password: String,
}

impl Default for LoginLabels {
    fn default() -> Self {
        Self {
            title: "Sign in".to_string(),
            intro: "Choose how you want to sign in.".to_string(),
            email: "Email".to_string(),
            password: "Password".to_string(),
        }
    }
}

/// Modal login dialog
///
/// Must be placed below a component that provides a [`Mediator`] context.
/// Each provider is rendered as a button carrying the provider name as a
/// class; clicks are routed through [`LoginView::dispatch`], which publishes
/// the login events on the mediator.
///
/// # Example
/// ```rust,ignore
/// use_context_provider(Mediator::new);
///
/// rsx! {
///     div { id: "dialogs",
///         LoginDialog { service_providers: registry }
///     }
/// }
/// ```
#[component]
pub fn LoginDialog(props: LoginDialogProps) -> Element {
    let mediator = use_context::<Mediator>();
    let view = use_signal(|| {
        LoginView::new(
            mediator,
            LoginViewOptions {
                service_providers: props.service_providers.clone(),
            },
        )
    });

    use_drop(move || {
        let mut view = view;
        if let Ok(mut view) = view.try_write() {
            view.dispose();
        };
    });

    let labels = props.labels.clone().unwrap_or_default();
    let options = *view.read().options();
    let fields: Vec<FormField> = view.read().form().fields().to_vec();
    let buttons: Vec<(String, String)> = view
        .read()
        .service_providers()
        .iter()
        .map(|(name, provider)| {
            (
                name.to_string(),
                provider.label().unwrap_or(name).to_string(),
            )
        })
        .collect();

    rsx! {
        div { id: "{options.id}", class: "{options.class_name}", role: "dialog",
            div { class: "modal-dialog",
                div { class: "modal-header",
                    h3 { "{labels.title}" }
                }
                div { class: "modal-body",
                    p { "{labels.intro}" }
                    form { onsubmit: move |evt| evt.prevent_default(),
                        for field in fields {
                            FormInput {
                                key: "{field.name}",
                                field,
                                labels: labels.clone(),
                                view,
                            }
                        }
                    }
                }
                div { class: "modal-footer",
                    for (name , label) in buttons {
                        ProviderButton { key: "{name}", name, label, view }
                    }
                }
            }
        }
    }
}

#[component]
fn FormInput(field: FormField, labels: LoginLabels, view: Signal<LoginView>) -> Element {
    let mut view = view;
    let (label, input_type) = match field.name.as_str() {
        "email" => (labels.email, "email"),
        "password" => (labels.password, "password"),
        other => (other.to_string(), "text"),
    };
    let name = field.name.clone();

    rsx! {
        label { class: "form-label",
            "{label}"
            input {
                class: "input",
                r#type: input_type,
                name: "{field.name}",
                value: "{field.value}",
                oninput: move |e| view.write().set_form_field(&name, e.value()),
            }
        }
    }
}

#[component]
fn ProviderButton(name: String, label: String, view: Signal<LoginView>) -> Element {
    let mut view = view;
    let class_name = name.clone();

    rsx! {
        button {
            class: "btn {class_name}",
            onclick: move |evt: MouseEvent| {
                let mut event = LoginView::provider_click(&name);
                view.write().dispatch(&mut event);
                if event.is_default_prevented() {
                    evt.prevent_default();
                }
            },
            "{label}"
        }
    }
}
