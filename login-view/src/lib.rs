//! # Login View
//!
//! A modal login dialog offering several service providers (social login
//! widgets, a plain email/password form, ...) as buttons.
//!
//! This crate provides:
//! - A mediator (publish/subscribe bus) shared across the application
//! - A typed service provider registry, validated on construction
//! - The `LoginView` that turns provider clicks into login events
//! - A Dioxus component rendering the dialog
//!
//! ## Separation of Concerns
//!
//! This crate only announces login intents. It does **not**:
//! - Authenticate against any provider (handled by mediator subscribers)
//! - Load third-party provider scripts (handled by the application)
//!
//! ## Published events
//!
//! | Topic | Args |
//! |---|---|
//! | `login:pickService` | `[provider_name]` |
//! | `!login` | `[provider_name, login_data or null]` |
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use login_view::{FormProvider, LoginDialog, Mediator, ServiceProviderRegistry};
//!
//! let mediator = use_context_provider(Mediator::new);
//! mediator.subscribe("!login", |args| log::info!("login with {}", args[0]));
//!
//! let registry = ServiceProviderRegistry::new().with("custom", FormProvider::default())?;
//!
//! rsx! {
//!     div { id: "dialogs",
//!         LoginDialog { service_providers: registry }
//!     }
//! }
//! ```

pub mod component;
pub mod error;
pub mod login;
pub mod mediator;
pub mod models;
pub mod provider;
pub mod view;

pub use component::{LoginDialog, LoginDialogProps, LoginLabels};
pub use error::LoginViewError;
pub use login::{LoginView, LoginViewOptions, CUSTOM_PROVIDER};
pub use mediator::{Mediator, SubscriptionId};
pub use models::{Form, FormField, LoginData, LoginEvent, LOGIN_TOPIC, PICK_SERVICE_TOPIC};
pub use provider::{
    DisabledProvider, FormProvider, ServiceProvider, ServiceProviderRegistry, WidgetProvider,
    WidgetReadiness,
};
pub use view::{DomEvent, Selector, Template, View, ViewBase, ViewOptions};
