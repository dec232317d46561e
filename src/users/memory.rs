use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::users::repo::UserStore;
use crate::users::repo_types::{StoreError, User};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<User>,
}

/// In-process users table. Rows stay in id order; email is unique like the
/// postgres index.
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.table().rows.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.table().rows.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.table().rows.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, username: &str, email: &str) -> Result<User, StoreError> {
        let mut table = self.table();
        if table.rows.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        table.next_id += 1;
        let user = User {
            id: table.next_id,
            username: username.to_string(),
            email: email.to_string(),
            active: true,
            creation_date: OffsetDateTime::now_utc(),
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User, username: &str, email: &str) -> Result<User, StoreError> {
        let mut table = self.table();
        if table.rows.iter().any(|u| u.email == email && u.id != user.id) {
            return Err(StoreError::DuplicateEmail);
        }
        let row = table
            .rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(StoreError::NotFound)?;
        row.username = username.to_string();
        row.email = email.to_string();
        Ok(row.clone())
    }

    async fn delete(&self, user: &User) -> Result<(), StoreError> {
        self.table().rows.retain(|u| u.id != user.id);
        Ok(())
    }
}
