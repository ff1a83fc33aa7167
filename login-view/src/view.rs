//! View capability set: rendering state, delegated events and form access.
//!
//! A concrete view embeds a [`ViewBase`] and implements [`View`] by exposing it.
//! Handlers are registered against a class selector and receive the view
//! itself, so they can call back into it the same way a bound method would.

use crate::models::{Form, LoginData};
use std::fmt;
use std::rc::Rc;

/// Fixed presentation settings of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Render as soon as the view is constructed
    pub auto_render: bool,
    /// Selector of the container the root element is placed into
    pub container_selector: &'static str,
    /// Root element id
    pub id: &'static str,
    /// Root element classes
    pub class_name: &'static str,
}

/// Markup the view renders; only the form inputs carry state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub form_fields: &'static [&'static str],
}

/// Class selector (`.name`) used to scope delegated handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector(String);

impl Selector {
    pub fn class(name: &str) -> Self {
        Self(format!(".{}", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn class_name(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// UI event as seen by delegated handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    kind: String,
    target_classes: Vec<String>,
    default_prevented: bool,
}

impl DomEvent {
    pub fn new<S: Into<String>>(kind: &str, target_classes: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind: kind.to_string(),
            target_classes: target_classes.into_iter().map(Into::into).collect(),
            default_prevented: false,
        }
    }

    /// Click on an element carrying `target_classes`
    pub fn click<S: Into<String>>(target_classes: impl IntoIterator<Item = S>) -> Self {
        Self::new("click", target_classes)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        self.target_classes
            .iter()
            .any(|class| class == selector.class_name())
    }
}

type Handler<V> = Rc<dyn Fn(&mut V, &mut DomEvent)>;

struct Delegation<V> {
    event: String,
    selector: Selector,
    handler: Handler<V>,
}

/// Shared state behind every [`View`]
pub struct ViewBase<V> {
    options: ViewOptions,
    template: Template,
    form: Form,
    delegations: Vec<Delegation<V>>,
    rendered: bool,
    disposed: bool,
}

impl<V> ViewBase<V> {
    pub fn new(options: ViewOptions, template: Template) -> Self {
        Self {
            options,
            template,
            form: Form::default(),
            delegations: Vec::new(),
            rendered: false,
            disposed: false,
        }
    }

    pub fn dispose(&mut self) {
        self.delegations.clear();
        self.disposed = true;
    }
}

pub trait View: Sized + 'static {
    fn base(&self) -> &ViewBase<Self>;

    fn base_mut(&mut self) -> &mut ViewBase<Self>;

    fn options(&self) -> &ViewOptions {
        &self.base().options
    }

    /// Render the template, resetting the form inputs
    fn render(&mut self) {
        let base = self.base_mut();
        base.form = Form::with_fields(base.template.form_fields.iter().copied());
        base.rendered = true;
        log::debug!(
            "Rendered #{} into {}",
            base.options.id,
            base.options.container_selector
        );
    }

    fn is_rendered(&self) -> bool {
        self.base().rendered
    }

    /// Register `handler` for `event` on elements matching `selector`
    fn delegate(
        &mut self,
        event: &str,
        selector: Selector,
        handler: impl Fn(&mut Self, &mut DomEvent) + 'static,
    ) {
        self.base_mut().delegations.push(Delegation {
            event: event.to_string(),
            selector,
            handler: Rc::new(handler),
        });
    }

    /// `(event, selector)` pairs currently delegated
    fn delegations(&self) -> Vec<(&str, &Selector)> {
        self.base()
            .delegations
            .iter()
            .map(|d| (d.event.as_str(), &d.selector))
            .collect()
    }

    /// Run every handler whose event and selector match; returns how many ran
    fn dispatch(&mut self, event: &mut DomEvent) -> usize {
        if self.base().disposed {
            return 0;
        }
        let handlers: Vec<Handler<Self>> = self
            .base()
            .delegations
            .iter()
            .filter(|d| d.event == event.kind() && event.matches(&d.selector))
            .map(|d| Rc::clone(&d.handler))
            .collect();
        for handler in &handlers {
            handler(self, event);
        }
        handlers.len()
    }

    fn form(&self) -> &Form {
        &self.base().form
    }

    fn set_form_field(&mut self, name: &str, value: String) {
        self.base_mut().form.set_field(name, value);
    }

    fn serialize_form(&self) -> LoginData {
        self.base().form.serialize()
    }

    /// Drop all delegations; the view ignores further events
    fn dispose(&mut self) {
        self.base_mut().dispose();
    }

    fn is_disposed(&self) -> bool {
        self.base().disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CounterView {
        base: ViewBase<CounterView>,
        clicks: Vec<String>,
    }

    impl View for CounterView {
        fn base(&self) -> &ViewBase<Self> {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ViewBase<Self> {
            &mut self.base
        }
    }

    fn counter_view() -> CounterView {
        let mut view = CounterView {
            base: ViewBase::new(
                ViewOptions {
                    auto_render: false,
                    container_selector: "#main",
                    id: "counter",
                    class_name: "counter",
                },
                Template {
                    form_fields: &["amount"],
                },
            ),
            clicks: Vec::new(),
        };
        for name in ["up", "down"] {
            view.delegate("click", Selector::class(name), move |v: &mut CounterView, e| {
                e.prevent_default();
                v.clicks.push(name.to_string());
            });
        }
        view
    }

    #[test]
    fn test_dispatch_matches_class_and_kind() {
        let mut view = counter_view();

        let mut event = DomEvent::click(["btn", "up"]);
        assert_eq!(view.dispatch(&mut event), 1);
        assert!(event.is_default_prevented());

        let mut hover = DomEvent::new("mouseover", ["up"]);
        assert_eq!(view.dispatch(&mut hover), 0);

        let mut partial = DomEvent::click(["upper"]);
        assert_eq!(view.dispatch(&mut partial), 0);
        assert!(!partial.is_default_prevented());

        assert_eq!(view.clicks, vec!["up".to_string()]);
    }

    #[test]
    fn test_render_resets_form() {
        let mut view = counter_view();
        assert!(!view.is_rendered());

        view.render();
        view.set_form_field("amount", "3".to_string());
        assert_eq!(view.serialize_form().get("amount"), Some("3"));

        view.render();
        assert!(view.is_rendered());
        assert_eq!(view.form().field("amount"), Some(""));
    }

    #[test]
    fn test_dispose_stops_dispatch() {
        let mut view = counter_view();
        view.dispose();

        let mut event = DomEvent::click(["down"]);
        assert_eq!(view.dispatch(&mut event), 0);
        assert!(view.delegations().is_empty());
        assert!(view.is_disposed());
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::class("custom").to_string(), ".custom");
        assert_eq!(Selector::class("custom").as_str(), ".custom");
    }
}
