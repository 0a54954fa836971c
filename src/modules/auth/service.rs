use tracing::{info, instrument};

use educapost_auth::create_token;
use educapost_config::JwtConfig;
use educapost_core::{AppError, verify_password};
use educapost_db::Store;
use educapost_models::{LoginRequest, LoginResponse, MeResponse};

use crate::middleware::auth::{AUTH_REQUIRED, AuthContext};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Checks the credentials against the table for the requested role.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    #[instrument(skip_all)]
    pub async fn login(
        store: &dyn Store,
        jwt_config: &JwtConfig,
        request: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let credentials = request.validate().map_err(AppError::validation)?;

        let account = store
            .find_account_by_email(credentials.role, &credentials.email)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        // A corrupt stored hash counts as a failed match.
        let matches =
            verify_password(&credentials.password, &account.password_hash).unwrap_or(false);
        if !matches {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = create_token(credentials.role, account.id, jwt_config)?;
        info!(role = %credentials.role, id = account.id, "Login succeeded");

        Ok(LoginResponse {
            token,
            role: credentials.role,
            id: account.id,
            name: account.name,
            email: account.email,
        })
    }

    pub fn me(context: &AuthContext) -> Result<MeResponse, AppError> {
        let account = context
            .account()
            .ok_or_else(|| AppError::unauthorized(AUTH_REQUIRED))?;

        Ok(MeResponse {
            role: context.principal.role,
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
        })
    }
}
