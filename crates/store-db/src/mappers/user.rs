//! User model -> entity mapper

use store_core::entities::{User, UserRole};
use store_core::error::DomainError;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model.role.parse::<UserRole>().map_err(|_| {
            DomainError::DatabaseError(format!(
                "user {} has an invalid role '{}'",
                model.user_id, model.role
            ))
        })?;

        Ok(User {
            id: model.user_id,
            username: model.username,
            email: model.email,
            name: model.name,
            role,
            created_at: model.created_at,
        })
    }
}
