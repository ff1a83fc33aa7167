use crate::error::AppError;
use login_view::{
    DisabledProvider, FormProvider, ServiceProviderRegistry, WidgetProvider, WidgetReadiness,
};
use serde::Deserialize;
use std::rc::Rc;
use std::time::Duration;

/// Built-in provider configuration, used when no config file is given
pub const DEFAULT_CONFIG: &str = include_str!("../login.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Form,
    Widget,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    pub name: String,
    pub kind: ProviderKind,
    #[serde(default)]
    pub label: Option<String>,
    /// Widget is ready right away
    #[serde(default)]
    pub preloaded: bool,
    /// Time the widget script takes to report ready
    #[serde(default)]
    pub load_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginConfig {
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

/// A widget that still has to finish loading
#[derive(Debug, Clone)]
pub struct PendingWidget {
    pub name: String,
    pub readiness: WidgetReadiness,
    pub delay: Duration,
}

/// Registry for the login dialog plus the widgets still loading
#[derive(Debug, Clone, Default)]
pub struct ProviderSetup {
    pub registry: ServiceProviderRegistry,
    pub pending: Vec<PendingWidget>,
}

pub fn parse_config(text: &str) -> Result<LoginConfig, AppError> {
    Ok(toml::from_str(text)?)
}

/// Load the config named by the first command line argument, or the built-in one
pub fn load_config() -> Result<LoginConfig, AppError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading login config from {}", path);
            parse_config(&std::fs::read_to_string(path)?)
        }
        None => parse_config(DEFAULT_CONFIG),
    }
}

impl LoginConfig {
    pub fn build_providers(&self) -> Result<ProviderSetup, AppError> {
        let mut setup = ProviderSetup::default();

        for provider in &self.providers {
            let label = provider.label.clone();
            match provider.kind {
                ProviderKind::Form => {
                    setup
                        .registry
                        .register(&provider.name, Rc::new(FormProvider::new(label)))?;
                }
                ProviderKind::Disabled => {
                    setup
                        .registry
                        .register(&provider.name, Rc::new(DisabledProvider::new(label)))?;
                }
                ProviderKind::Widget => {
                    let widget = if provider.preloaded {
                        WidgetProvider::preloaded(label)
                    } else {
                        WidgetProvider::new(label)
                    };
                    let readiness = widget.readiness();
                    setup.registry.register(&provider.name, Rc::new(widget))?;

                    if !provider.preloaded {
                        match provider.load_delay_ms {
                            Some(ms) => setup.pending.push(PendingWidget {
                                name: provider.name.clone(),
                                readiness,
                                delay: Duration::from_millis(ms),
                            }),
                            None => log::warn!(
                                "Widget {} has no load delay and is not preloaded; it will stay unavailable",
                                provider.name
                            ),
                        }
                    }
                }
            }
        }

        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use login_view::LoginViewError;

    #[test]
    fn test_default_config_builds() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let setup = config.build_providers().unwrap();

        assert_eq!(
            setup.registry.names().collect::<Vec<_>>(),
            vec!["custom", "facebook", "google", "twitter"]
        );
        assert!(setup.registry.get("custom").unwrap().is_loaded());
        assert!(setup.registry.get("google").unwrap().is_loaded());
        assert!(!setup.registry.get("facebook").unwrap().is_loaded());
        assert!(!setup.registry.get("twitter").unwrap().is_loaded());

        assert_eq!(setup.pending.len(), 1);
        assert_eq!(setup.pending[0].name, "facebook");
        assert_eq!(setup.pending[0].delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_pending_widget_readiness_reaches_registry() {
        let config = parse_config(
            r#"
            [[providers]]
            name = "github"
            kind = "widget"
            load_delay_ms = 10
            "#,
        )
        .unwrap();
        let setup = config.build_providers().unwrap();

        setup.pending[0].readiness.mark_loaded();
        assert!(setup.registry.get("github").unwrap().is_loaded());
        assert_eq!(setup.registry.get("github").unwrap().label(), None);
    }

    #[test]
    fn test_empty_config() {
        let setup = parse_config("").unwrap().build_providers().unwrap();
        assert!(setup.registry.is_empty());
        assert!(setup.pending.is_empty());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = parse_config(
            r#"
            [[providers]]
            name = "custom"
            kind = "magic"
            "#,
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_duplicate_provider_rejected() {
        let config = parse_config(
            r#"
            [[providers]]
            name = "custom"
            kind = "form"

            [[providers]]
            name = "custom"
            kind = "disabled"
            "#,
        )
        .unwrap();

        match config.build_providers() {
            Err(AppError::Provider(LoginViewError::DuplicateProvider(name))) => {
                assert_eq!(name, "custom")
            }
            other => panic!("unexpected result: {:?}", other.map(|s| s.registry.len())),
        }
    }

    #[test]
    fn test_invalid_provider_name_rejected() {
        let config = parse_config(
            r#"
            [[providers]]
            name = "sign in"
            kind = "form"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.build_providers(),
            Err(AppError::Provider(LoginViewError::InvalidProviderName(_)))
        ));
    }
}
