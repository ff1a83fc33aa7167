use crate::config::{self, ProviderSetup};
use dioxus::prelude::*;
use dioxus_i18n::t;
use login_view::{
    LoginDialog, LoginEvent, LoginLabels, Mediator, SubscriptionId, LOGIN_TOPIC,
    PICK_SERVICE_TOPIC,
};

fn load_providers() -> Result<ProviderSetup, String> {
    config::load_config()
        .and_then(|config| config.build_providers())
        .map_err(|e| {
            log::error!("Login setup failed: {}", e);
            e.user_message()
        })
}

/// Hosts the dialogs container and reacts to login requests from the dialog
#[component]
pub fn LoginScreen() -> Element {
    let mediator = use_context::<Mediator>();
    let last_intent = use_signal(|| None::<LoginEvent>);
    let setup = use_hook(load_providers);

    // Stand-in for the auth controller: remembers the latest login request
    let subscriptions: Vec<SubscriptionId> = use_hook(|| {
        let pick = mediator.subscribe(PICK_SERVICE_TOPIC, |args| {
            log::debug!("Service picked: {:?}", args.first());
        });
        let login = mediator.subscribe(LOGIN_TOPIC, move |args| {
            match LoginEvent::from_message(LOGIN_TOPIC, args) {
                Some(event) => {
                    log::info!("Login requested with {}", event.provider());
                    let mut intent = last_intent;
                    intent.set(Some(event));
                }
                None => log::warn!("Malformed {} message: {:?}", LOGIN_TOPIC, args),
            }
        });
        vec![pick, login]
    });

    use_hook(|| {
        if let Ok(setup) = &setup {
            for widget in setup.pending.clone() {
                spawn(async move {
                    tokio::time::sleep(widget.delay).await;
                    widget.readiness.mark_loaded();
                    log::info!("Widget {} loaded", widget.name);
                });
            }
        }
    });

    {
        let mediator = mediator.clone();
        use_drop(move || {
            for id in &subscriptions {
                mediator.unsubscribe(*id);
            }
        });
    }

    let labels = LoginLabels {
        title: t!("login-title"),
        intro: t!("login-intro"),
        email: t!("login-email-label"),
        password: t!("login-password-label"),
    };

    rsx! {
        div { class: "login-screen",
            h1 { class: "app-title", {t!("app-title")} }

            match setup {
                Ok(setup) => rsx! {
                    div { id: "dialogs",
                        LoginDialog { service_providers: setup.registry, labels: Some(labels) }
                    }
                    IntentPanel { intent: last_intent() }
                },
                Err(error) => rsx! {
                    div { class: "error-box", {t!("error-config", error: error)} }
                },
            }
        }
    }
}

#[component]
fn IntentPanel(intent: Option<LoginEvent>) -> Element {
    // Only field names are shown; values may hold a password
    let summary = match intent {
        Some(LoginEvent::Login {
            provider,
            login_data,
        }) => {
            let fields = login_data
                .map(|data| {
                    data.iter()
                        .map(|(name, _)| name.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_else(|| "-".to_string());
            Some((provider, fields))
        }
        _ => None,
    };

    rsx! {
        div { class: "card intent",
            p { class: "card-title", {t!("login-last-intent")} }
            match summary {
                Some((provider, fields)) => rsx! {
                    p { {t!("login-intent-provider", provider: provider)} }
                    p { {t!("login-intent-fields", fields: fields)} }
                },
                None => rsx! {
                    p { {t!("login-no-intent")} }
                },
            }
        }
    }
}
