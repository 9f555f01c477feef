//! Application Context
//!
//! Collaborators shared with every component via the Leptos Context API: the
//! gateway, the label lookup, the permission policy and the current actor.

use std::sync::Arc;

use chums_core::{Actor, AppConfig, Capability, Gateway, Labels, Locale, PermissionPolicy};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppContext {
    gateway: StoredValue<Arc<dyn Gateway>>,
    locale: StoredValue<Arc<dyn Locale>>,
    policy: StoredValue<Arc<dyn PermissionPolicy>>,
    actor: StoredValue<Actor>,
    gallery: StoredValue<Vec<String>>,
    /// How long failure notices stay visible
    pub notice_timeout_ms: u32,
}

impl AppContext {
    pub fn new(config: &AppConfig, gateway: Arc<dyn Gateway>) -> Self {
        let labels = Labels::english().with_overrides(config.labels.clone());
        Self {
            gateway: StoredValue::new(gateway),
            locale: StoredValue::new(Arc::new(labels) as Arc<dyn Locale>),
            policy: StoredValue::new(Arc::new(config.actor.clone()) as Arc<dyn PermissionPolicy>),
            actor: StoredValue::new(config.actor.clone()),
            gallery: StoredValue::new(config.gallery.clone()),
            notice_timeout_ms: config.notice_timeout_ms,
        }
    }

    pub fn gateway(&self) -> Arc<dyn Gateway> {
        self.gateway.get_value()
    }

    pub fn locale(&self) -> Arc<dyn Locale> {
        self.locale.get_value()
    }

    pub fn label(&self, key: &str) -> String {
        self.locale.with_value(|locale| locale.label(key))
    }

    /// Capability check, evaluated at render time
    pub fn can(&self, capability: &Capability) -> bool {
        self.policy.with_value(|policy| policy.check_access(capability))
    }

    pub fn actor(&self) -> Actor {
        self.actor.get_value()
    }

    pub fn gallery(&self) -> Vec<String> {
        self.gallery.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
