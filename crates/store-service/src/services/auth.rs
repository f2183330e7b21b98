//! Authentication service
//!
//! Handles user and admin registration, login, and the startup admin bootstrap.

use store_common::auth::{hash_password, verify_password};
use store_common::{AdminConfig, AppError};
use store_core::entities::{NewUser, User, UserRole};
use store_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    AdminRegisterResponse, LoggedInUserResponse, LoginRequest, LoginResponse,
    RegisterAdminRequest, RegisterRequest, RegisterResponse, RegisteredUserResponse,
    REQUIRED_FIELDS_MESSAGE,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Display name given to admins registered without one
pub const DEFAULT_ADMIN_NAME: &str = "Administrador";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a regular user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        if request.has_blank_fields() {
            return Err(ServiceError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        request.validate()?;

        let username = request.username.trim().to_string();
        let email = request.email.trim().to_string();

        if self
            .ctx
            .user_repo()
            .email_or_username_exists(&email, &username)
            .await?
        {
            warn!("Registration rejected: user or email taken");
            return Err(DomainError::UserAlreadyExists.into());
        }

        let user = self
            .create_user(
                NewUser {
                    username: Some(username),
                    email,
                    name: None,
                    role: UserRole::User,
                },
                &request.password,
            )
            .await?;

        let token = self.issue_token(&user)?;
        info!(user_id = user.id, "User registered successfully");

        Ok(RegisterResponse::new(
            token,
            RegisteredUserResponse::from(&user),
        ))
    }

    /// Register an administrator
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_admin(
        &self,
        request: RegisterAdminRequest,
    ) -> ServiceResult<AdminRegisterResponse> {
        if request.has_blank_fields() {
            return Err(ServiceError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        request.validate()?;

        let email = request.email.trim().to_string();
        if self.ctx.user_repo().email_exists(&email).await? {
            warn!("Admin registration rejected: email taken");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_ADMIN_NAME)
            .to_string();

        let user = self
            .create_user(
                NewUser {
                    username: None,
                    email,
                    name: Some(name),
                    role: UserRole::Admin,
                },
                &request.password,
            )
            .await?;

        let token = self.issue_token(&user)?;
        info!(user_id = user.id, "Admin registered successfully");

        Ok(AdminRegisterResponse::new(token))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let email = request.email.trim();
        if email.is_empty() || request.password.is_empty() {
            warn!("Login failed: missing credentials");
            return Err(AppError::InvalidCredentials.into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash) {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        let token = self.issue_token(&user)?;
        info!(user_id = user.id, "User logged in successfully");

        Ok(LoginResponse::new(token, LoggedInUserResponse::from(&user)))
    }

    /// Make sure the configured bootstrap admin exists.
    ///
    /// Returns `true` when the account was created by this call.
    #[instrument(skip(self, admin), fields(email = %admin.email))]
    pub async fn ensure_admin(&self, admin: &AdminConfig) -> ServiceResult<bool> {
        if self.ctx.user_repo().email_exists(&admin.email).await? {
            return Ok(false);
        }

        let user = self
            .create_user(
                NewUser {
                    username: None,
                    email: admin.email.clone(),
                    name: Some(admin.name.clone()),
                    role: UserRole::Admin,
                },
                &admin.password,
            )
            .await?;

        info!(user_id = user.id, "Bootstrap admin created");
        Ok(true)
    }

    async fn create_user(&self, user: NewUser, password: &str) -> ServiceResult<User> {
        let password_hash = hash_password(password)?;
        Ok(self.ctx.user_repo().create(&user, &password_hash).await?)
    }

    fn issue_token(&self, user: &User) -> ServiceResult<String> {
        Ok(self
            .ctx
            .jwt_service()
            .generate_token(user.id, &user.email, user.role)?)
    }
}
