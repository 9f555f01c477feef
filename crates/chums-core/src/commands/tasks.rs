//! Task Commands
//!
//! Tasks live on the doing API.

use log::debug;

use super::{batch, decode};
use crate::domain::{DomainResult, NewTask, Task, TaskStatus};
use crate::gateway::{Gateway, ServiceName};

const SERVICE: ServiceName = ServiceName::DoingApi;

pub async fn list_tasks(gateway: &dyn Gateway, status: TaskStatus) -> DomainResult<Vec<Task>> {
    let tasks: Vec<Task> = decode(gateway.get(status.path(), SERVICE).await?)?;
    debug!("[TASKS] {} {} tasks", tasks.len(), status.as_str());
    Ok(tasks)
}

pub async fn create_task(gateway: &dyn Gateway, task: &NewTask) -> DomainResult<()> {
    gateway.post("/tasks", batch(std::slice::from_ref(task))?, SERVICE).await?;
    Ok(())
}
