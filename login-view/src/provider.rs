use crate::error::LoginViewError;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A login mechanism offered in the dialog (social widget, plain form, ...)
pub trait ServiceProvider: fmt::Debug {
    /// Whether the provider is ready to accept a login. Clicks on a provider
    /// that is not loaded are ignored.
    fn is_loaded(&self) -> bool;

    /// Button caption. Defaults to the provider name.
    fn label(&self) -> Option<&str> {
        None
    }
}

/// Provider backed by the dialog's own form; always ready
#[derive(Debug, Clone, Default)]
pub struct FormProvider {
    label: Option<String>,
}

impl FormProvider {
    pub fn new(label: Option<String>) -> Self {
        Self { label }
    }
}

impl ServiceProvider for FormProvider {
    fn is_loaded(&self) -> bool {
        true
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Shared readiness flag of a [`WidgetProvider`]
#[derive(Debug, Clone, Default)]
pub struct WidgetReadiness(Rc<Cell<bool>>);

impl WidgetReadiness {
    pub fn mark_loaded(&self) {
        self.0.set(true);
    }

    pub fn is_loaded(&self) -> bool {
        self.0.get()
    }
}

/// Third-party widget that becomes usable once its script reports ready
#[derive(Debug, Clone, Default)]
pub struct WidgetProvider {
    label: Option<String>,
    readiness: WidgetReadiness,
}

impl WidgetProvider {
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            readiness: WidgetReadiness::default(),
        }
    }

    pub fn preloaded(label: Option<String>) -> Self {
        let provider = Self::new(label);
        provider.readiness.mark_loaded();
        provider
    }

    /// Handle for the code that loads the widget
    pub fn readiness(&self) -> WidgetReadiness {
        self.readiness.clone()
    }
}

impl ServiceProvider for WidgetProvider {
    fn is_loaded(&self) -> bool {
        self.readiness.is_loaded()
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Listed in the dialog but never usable
#[derive(Debug, Clone, Default)]
pub struct DisabledProvider {
    label: Option<String>,
}

impl DisabledProvider {
    pub fn new(label: Option<String>) -> Self {
        Self { label }
    }
}

impl ServiceProvider for DisabledProvider {
    fn is_loaded(&self) -> bool {
        false
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Provider names are used verbatim as class selectors (`"." + name`)
fn validate_name(name: &str) -> Result<(), LoginViewError> {
    // After an optional leading '-', something must follow and it can't be a digit
    let body = name.strip_prefix('-').unwrap_or(name);
    let valid = match body.chars().next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '-')
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(LoginViewError::InvalidProviderName(name.to_string()))
    }
}

/// Service providers by name, validated on insertion
#[derive(Clone, Default)]
pub struct ServiceProviderRegistry {
    providers: BTreeMap<String, Rc<dyn ServiceProvider>>,
}

impl ServiceProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: Rc<dyn ServiceProvider>,
    ) -> Result<(), LoginViewError> {
        let name = name.into();
        validate_name(&name)?;
        if self.providers.contains_key(&name) {
            return Err(LoginViewError::DuplicateProvider(name));
        }
        self.providers.insert(name, provider);
        Ok(())
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(
        mut self,
        name: impl Into<String>,
        provider: impl ServiceProvider + 'static,
    ) -> Result<Self, LoginViewError> {
        self.register(name, Rc::new(provider))?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Rc<dyn ServiceProvider>> {
        self.providers.get(name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<dyn ServiceProvider>)> {
        self.providers.iter().map(|(name, p)| (name.as_str(), p))
    }
}

impl PartialEq for ServiceProviderRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.providers.len() == other.providers.len()
            && self
                .providers
                .iter()
                .zip(other.providers.iter())
                .all(|((a, pa), (b, pb))| a == b && Rc::ptr_eq(pa, pb))
    }
}

impl fmt::Debug for ServiceProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.providers.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = ServiceProviderRegistry::new()
            .with("custom", FormProvider::default())
            .unwrap()
            .with("facebook", WidgetProvider::preloaded(Some("Facebook".into())))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get("custom").unwrap().is_loaded());
        assert_eq!(registry.get("facebook").unwrap().label(), Some("Facebook"));
        assert!(registry.get("twitter").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = ServiceProviderRegistry::new()
            .with("custom", FormProvider::default())
            .unwrap()
            .with("custom", DisabledProvider::default());

        assert_eq!(
            result.unwrap_err(),
            LoginViewError::DuplicateProvider("custom".to_string())
        );
    }

    #[test]
    fn test_invalid_names_rejected() {
        for name in ["", "-", "-1abc", "two words", "1password", "a.b", "#id", "x>y"] {
            let result = ServiceProviderRegistry::new().with(name, FormProvider::default());
            assert_eq!(
                result.unwrap_err(),
                LoginViewError::InvalidProviderName(name.to_string()),
                "name {:?} should be rejected",
                name
            );
        }
        for name in ["google-oauth2", "_local", "github", "-moz-login", "--x"] {
            assert!(ServiceProviderRegistry::new()
                .with(name, FormProvider::default())
                .is_ok());
        }
    }

    #[test]
    fn test_widget_readiness_is_shared() {
        let widget = WidgetProvider::new(None);
        let readiness = widget.readiness();
        assert!(!widget.is_loaded());

        readiness.mark_loaded();
        assert!(widget.is_loaded());
    }

    #[test]
    fn test_disabled_provider_never_loaded() {
        assert!(!DisabledProvider::new(Some("Soon".into())).is_loaded());
    }

    #[test]
    fn test_registry_equality_is_by_identity() {
        let registry = ServiceProviderRegistry::new()
            .with("custom", FormProvider::default())
            .unwrap();
        let copy = registry.clone();
        let rebuilt = ServiceProviderRegistry::new()
            .with("custom", FormProvider::default())
            .unwrap();

        assert_eq!(registry, copy);
        assert_ne!(registry, rebuilt);
    }
}
