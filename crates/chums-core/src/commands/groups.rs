//! Group Commands

use log::debug;

use super::{batch, decode, decode_first};
use crate::domain::{is_missing, DomainError, DomainResult, Group};
use crate::gateway::{Gateway, ServiceName};

const SERVICE: ServiceName = ServiceName::MembershipApi;

pub fn group_path(id: &str) -> String {
    format!("/groups/{}", id)
}

fn require_id(id: &str) -> DomainResult<()> {
    if is_missing(Some(id)) {
        Err(DomainError::MissingId)
    } else {
        Ok(())
    }
}

pub async fn load_group(gateway: &dyn Gateway, id: &str) -> DomainResult<Group> {
    require_id(id)?;
    decode(gateway.get(&group_path(id), SERVICE).await?)
}

/// Upsert one group and return the server's canonical copy
pub async fn save_group(gateway: &dyn Gateway, group: &Group) -> DomainResult<Group> {
    let value = gateway.post("/groups", batch(std::slice::from_ref(group))?, SERVICE).await?;
    let saved: Group = decode_first(value)?;
    debug!("[GROUPS] saved {:?}", saved.id);
    Ok(saved)
}

pub async fn delete_group(gateway: &dyn Gateway, id: &str) -> DomainResult<()> {
    require_id(id)?;
    gateway.delete(&group_path(id), SERVICE).await
}
