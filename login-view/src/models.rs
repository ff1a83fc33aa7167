use crate::mediator::Mediator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Topic published when the user picks a service provider
pub const PICK_SERVICE_TOPIC: &str = "login:pickService";

/// Topic published to ask the application to log in
pub const LOGIN_TOPIC: &str = "!login";

/// Form field values captured from the login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginData(BTreeMap<String, String>);

impl LoginData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// JSON object form, as carried on the mediator
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LoginData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single named input of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Input state of the form rendered inside a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    /// Create a form with empty fields in the given order
    pub fn with_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: names
                .into_iter()
                .map(|name| FormField {
                    name: name.to_string(),
                    value: String::new(),
                })
                .collect(),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Set a field's value, appending the field when the form doesn't have it yet
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(FormField {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Collect every named field into [`LoginData`]. Unnamed inputs are skipped.
    pub fn serialize(&self) -> LoginData {
        self.fields
            .iter()
            .filter(|f| !f.name.is_empty())
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

/// Login intents published by the login view
#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    /// The user picked a provider
    PickService { provider: String },
    /// Log in with a provider, carrying the last captured form data
    Login {
        provider: String,
        login_data: Option<LoginData>,
    },
}

impl LoginEvent {
    pub fn topic(&self) -> &'static str {
        match self {
            LoginEvent::PickService { .. } => PICK_SERVICE_TOPIC,
            LoginEvent::Login { .. } => LOGIN_TOPIC,
        }
    }

    pub fn provider(&self) -> &str {
        match self {
            LoginEvent::PickService { provider } | LoginEvent::Login { provider, .. } => provider,
        }
    }

    /// Publish on `mediator` under this event's topic
    pub fn publish(self, mediator: &Mediator) -> usize {
        let topic = self.topic();
        mediator.publish(topic, self.into_args())
    }

    /// Positional mediator arguments for this event
    pub fn into_args(self) -> Vec<Value> {
        match self {
            LoginEvent::PickService { provider } => vec![Value::String(provider)],
            LoginEvent::Login {
                provider,
                login_data,
            } => vec![
                Value::String(provider),
                login_data.map_or(Value::Null, |data| data.to_value()),
            ],
        }
    }

    /// Decode a mediator message. Returns `None` for foreign topics or malformed args.
    pub fn from_message(topic: &str, args: &[Value]) -> Option<Self> {
        let provider = args.first()?.as_str()?.to_string();
        match topic {
            PICK_SERVICE_TOPIC => Some(LoginEvent::PickService { provider }),
            LOGIN_TOPIC => {
                let login_data = match args.get(1) {
                    None | Some(Value::Null) => None,
                    Some(value) => Some(serde_json::from_value(value.clone()).ok()?),
                };
                Some(LoginEvent::Login {
                    provider,
                    login_data,
                })
            }
            _ => None,
        }
    }
}
