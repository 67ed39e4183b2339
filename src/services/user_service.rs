//! User service for profile operations and the admin user listing.

use mongodb::bson::{oid::ObjectId, Document};
use mongodb::Database;
use std::sync::Arc;

use crate::constants::{
    CODE_CONFLICT, CODE_NOT_FOUND, ERR_EMAIL_EXISTS, ERR_PROFILE_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{UpdateProfileRequest, UserResponse};
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Fetch the caller's profile.
    pub async fn get_profile(&self, user_id: ObjectId) -> Result<UserResponse, ApiError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::NotFound {
                code: CODE_NOT_FOUND.to_string(),
                message: ERR_PROFILE_NOT_FOUND.to_string(),
            })?;

        Ok(user.into())
    }

    /// Partially update the caller's profile; absent fields keep their
    /// current value.
    pub async fn update_profile(
        &self,
        user_id: ObjectId,
        req: UpdateProfileRequest,
    ) -> Result<UserResponse, ApiError> {
        let existing = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::NotFound {
                code: CODE_NOT_FOUND.to_string(),
                message: ERR_PROFILE_NOT_FOUND.to_string(),
            })?;

        let mut set = Document::new();

        if let Some(name) = req.name {
            set.insert("name", name);
        }

        if let Some(email) = req.email {
            let email = email.to_lowercase();
            if email != existing.email {
                if self.repository.find_by_email(&email).await?.is_some() {
                    return Err(ApiError::Conflict {
                        code: CODE_CONFLICT.to_string(),
                        message: ERR_EMAIL_EXISTS.to_string(),
                    });
                }
                set.insert("email", email);
            }
        }

        if let Some(phone) = req.phone {
            set.insert("profile.phone", phone);
        }

        if let Some(address) = req.address {
            set.insert("profile.address", address);
        }

        if let Some(profile_image) = req.profile_image {
            set.insert("profile.profile_image", profile_image);
        }

        if set.is_empty() {
            return Ok(existing.into());
        }

        let updated = self
            .repository
            .update_fields(user_id, set)
            .await?
            .ok_or(ApiError::NotFound {
                code: CODE_NOT_FOUND.to_string(),
                message: ERR_PROFILE_NOT_FOUND.to_string(),
            })?;

        Ok(updated.into())
    }

    /// Paginated user listing for administrators, newest first.
    pub async fn get_users(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<UserResponse>, u64), ApiError> {
        let total = self.repository.count().await?;
        let skip = (page - 1) * per_page;

        let users = self.repository.find_page(skip, per_page as i64).await?;
        let responses = users.into_iter().map(|u| u.into()).collect();

        Ok((responses, total))
    }
}
