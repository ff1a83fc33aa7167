use crate::mediator::Mediator;
use crate::models::{LoginData, LoginEvent};
use crate::provider::{ServiceProvider, ServiceProviderRegistry};
use crate::view::{DomEvent, Selector, Template, View, ViewBase, ViewOptions};
use std::rc::Rc;

/// Provider whose clicks capture the dialog's form
pub const CUSTOM_PROVIDER: &str = "custom";

/// Modal dialog placed into the dialogs container
pub const LOGIN_VIEW_OPTIONS: ViewOptions = ViewOptions {
    auto_render: true,
    container_selector: "#dialogs",
    id: "login",
    class_name: "modal fade",
};

pub const LOGIN_TEMPLATE: Template = Template {
    form_fields: &["email", "password"],
};

/// Options accepted by [`LoginView::new`]
#[derive(Debug, Clone, Default)]
pub struct LoginViewOptions {
    pub service_providers: ServiceProviderRegistry,
}

/// Login dialog that turns provider button clicks into mediator events
///
/// Every registered provider gets one click handler scoped to `.name`.
/// A click on a loaded provider publishes `login:pickService` and then
/// `!login` with the most recently captured form data.
pub struct LoginView {
    base: ViewBase<LoginView>,
    mediator: Mediator,
    service_providers: ServiceProviderRegistry,
    login_data: Option<LoginData>,
}

impl LoginView {
    pub fn new(mediator: Mediator, options: LoginViewOptions) -> Self {
        let mut view = Self {
            base: ViewBase::new(LOGIN_VIEW_OPTIONS, LOGIN_TEMPLATE),
            mediator,
            service_providers: options.service_providers,
            login_data: None,
        };
        view.initialize();
        if view.options().auto_render {
            view.render();
        }
        view
    }

    fn initialize(&mut self) {
        let providers: Vec<(String, Rc<dyn ServiceProvider>)> = self
            .service_providers
            .iter()
            .map(|(name, provider)| (name.to_string(), Rc::clone(provider)))
            .collect();

        for (name, provider) in providers {
            log::info!("LoginView {}", name);
            let selector = Selector::class(&name);
            self.delegate("click", selector, move |view: &mut LoginView, event| {
                view.login_with(&name, provider.as_ref(), event)
            });
        }
    }

    /// Handle a click on `provider_name`'s button
    pub fn login_with(
        &mut self,
        provider_name: &str,
        provider: &dyn ServiceProvider,
        event: &mut DomEvent,
    ) {
        event.prevent_default();
        if !provider.is_loaded() {
            return;
        }

        if provider_name == CUSTOM_PROVIDER {
            self.login_data = Some(self.serialize_form());
        }

        // login_data is not cleared for other providers; a custom capture stays
        // attached to every later login until the next custom click.
        LoginEvent::PickService {
            provider: provider_name.to_string(),
        }
        .publish(&self.mediator);
        LoginEvent::Login {
            provider: provider_name.to_string(),
            login_data: self.login_data.clone(),
        }
        .publish(&self.mediator);

        log::debug!("LoginView#loginWith {} {:?}", provider_name, provider);
    }

    /// Click on `provider_name`'s button. Only the provider class is carried;
    /// styling classes of the button must not reach the delegations.
    pub fn provider_click(provider_name: &str) -> DomEvent {
        DomEvent::click([provider_name])
    }

    pub fn login_data(&self) -> Option<&LoginData> {
        self.login_data.as_ref()
    }

    pub fn service_providers(&self) -> &ServiceProviderRegistry {
        &self.service_providers
    }

    pub fn mediator(&self) -> &Mediator {
        &self.mediator
    }
}

impl View for LoginView {
    fn base(&self) -> &ViewBase<Self> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase<Self> {
        &mut self.base
    }

    fn dispose(&mut self) {
        self.base.dispose();
        self.login_data = None;
    }
}
