/// Role names carried in authentication tokens
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

/// User context extracted from authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub username: String,
    pub is_admin: bool,
}

impl UserContext {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            is_admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn role(&self) -> &'static str {
        if self.is_admin {
            roles::ADMIN
        } else {
            roles::USER
        }
    }
}

/// Authorization error types
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Admin role required")]
    AdminRequired,
}

/// Check that a (possibly anonymous) caller may perform an admin-only action
pub fn ensure_admin(user: Option<&UserContext>) -> Result<&UserContext, AuthorizationError> {
    match user {
        None => Err(AuthorizationError::AuthenticationRequired),
        Some(ctx) if !ctx.is_admin() => Err(AuthorizationError::AdminRequired),
        Some(ctx) => Ok(ctx),
    }
}
