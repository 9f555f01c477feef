//! Actor
//!
//! The signed-in person. Passed to components explicitly through context.

use serde::{Deserialize, Serialize};

use crate::permissions::{Capability, PermissionPolicy};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Actor {
    /// Person record id; `None` for an anonymous session
    pub person_id: Option<String>,
    pub display_name: String,
    pub capabilities: Vec<Capability>,
}

impl Actor {
    pub fn new(person_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            person_id: Some(person_id.into()),
            display_name: display_name.into(),
            capabilities: Vec::new(),
        }
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    /// Person id usable for matching; missing ids match nothing
    pub fn person_id(&self) -> Option<&str> {
        self.person_id
            .as_deref()
            .filter(|id| !super::is_missing(Some(id)))
    }
}

impl PermissionPolicy for Actor {
    fn check_access(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_capabilities() {
        let actor = Actor::new("p1", "Pat").with_capability(Capability::notes_edit());
        assert!(actor.check_access(&Capability::notes_edit()));
        assert!(!actor.check_access(&Capability::groups_edit()));
    }

    #[test]
    fn test_blank_person_id_is_treated_as_absent() {
        let mut actor = Actor::new("", "Nobody");
        assert_eq!(actor.person_id(), None);
        actor.person_id = Some("p9".into());
        assert_eq!(actor.person_id(), Some("p9"));
    }
}
