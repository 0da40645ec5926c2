//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tracing::info;

use safevault_auth::jwt::TokenService;
use safevault_auth::password::PasswordHasher;
use safevault_auth::rbac::RbacEnforcer;
use safevault_core::config::AppConfig;
use safevault_core::error::AppError;
use safevault_database::{CredentialStore, DatabasePool, UserRepository};
use safevault_service::{AdminUserService, AuthService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Role-based access control enforcer
    pub rbac: Arc<RbacEnforcer>,
    /// Login and token verification
    pub auth_service: Arc<AuthService>,
    /// User administration
    pub admin_user_service: Arc<AdminUserService>,
}

impl AppState {
    /// Bootstraps the credential store and wires every service.
    ///
    /// Fails if the schema or the administrator record cannot be created.
    pub async fn initialize(config: AppConfig, db: DatabasePool) -> Result<Self, AppError> {
        let hasher = Arc::new(PasswordHasher::new());
        let repo = UserRepository::new(db.pool().clone());

        let bootstrap_password = config.auth.bootstrap_admin_password.clone();
        repo.initialize(|| hasher.hash_password(&bootstrap_password))
            .await?;
        info!("Credential store ready");

        let store: Arc<dyn CredentialStore> = Arc::new(repo);
        let tokens = Arc::new(TokenService::new(&config.auth.jwt_secret));
        let rbac = Arc::new(RbacEnforcer::new());

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&store),
            tokens,
            Arc::clone(&hasher),
            Arc::clone(&rbac),
        ));
        let admin_user_service = Arc::new(AdminUserService::new(
            Arc::clone(&store),
            Arc::clone(&hasher),
            Arc::clone(&rbac),
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            rbac,
            auth_service,
            admin_user_service,
        })
    }
}
