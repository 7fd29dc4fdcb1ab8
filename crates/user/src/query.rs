use crate::command::Command;
use crate::error::UserResult;
use crate::repository::{self, FindType, UserRow};

impl Command {
    pub async fn get_user_by_id(&self, id: impl Into<String>) -> UserResult<Option<UserRow>> {
        repository::find(&self.0, FindType::Id(id.into())).await
    }

    pub async fn list(&self) -> UserResult<Vec<UserRow>> {
        repository::list(&self.0).await
    }
}
