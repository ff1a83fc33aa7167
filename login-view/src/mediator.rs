//! Application-wide publish/subscribe bus.
//!
//! A [`Mediator`] is a cheap, cloneable handle. Create one at the top of the
//! application and hand it to every view that needs to publish; all clones
//! share the same subscriber list. Delivery is synchronous and follows
//! subscription order.

use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Mediator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&[Value])>;

struct Subscription {
    id: SubscriptionId,
    topic: String,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

#[derive(Clone, Default)]
pub struct Mediator {
    inner: Rc<RefCell<Registry>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `topic`. The handler receives the published args.
    pub fn subscribe(
        &self,
        topic: impl Into<String>,
        handler: impl Fn(&[Value]) + 'static,
    ) -> SubscriptionId {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = SubscriptionId(registry.next_id);
        registry.subscriptions.push(Subscription {
            id,
            topic: topic.into(),
            handler: Rc::new(handler),
        });
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let before = registry.subscriptions.len();
        registry.subscriptions.retain(|s| s.id != id);
        registry.subscriptions.len() != before
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.inner
            .borrow()
            .subscriptions
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }

    /// Deliver `args` to every subscriber of `topic`, returning how many were called.
    ///
    /// Handlers may subscribe, unsubscribe or publish while being called; changes
    /// take effect from the next publish.
    pub fn publish(&self, topic: &str, args: Vec<Value>) -> usize {
        let handlers: Vec<Handler> = self
            .inner
            .borrow()
            .subscriptions
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| Rc::clone(&s.handler))
            .collect();

        log::trace!("Mediator publish {} to {} subscriber(s)", topic, handlers.len());

        for handler in &handlers {
            handler(&args);
        }
        handlers.len()
    }
}

impl PartialEq for Mediator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Mediator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mediator")
            .field("subscriptions", &self.inner.borrow().subscriptions.len())
            .finish()
    }
}
