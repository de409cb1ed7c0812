use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::modules::auth::application::domain::entities::AdminUser;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_admin_user(model: UserModel) -> AdminUser {
        AdminUser {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            password_hash: model.password_hash,
            is_deleted: model.is_deleted,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, UserQueryError> {
        // Active account wins over a soft-deleted one with the same address
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .order_by_asc(UserColumn::IsDeleted)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::to_admin_user))
    }
}
