//! Demo-grade login. This is NOT a security boundary: any plausible-looking
//! email with a password of minimum length is accepted, and no credential
//! store exists. A production deployment must swap this handler for a real
//! authentication service behind the same contract.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
}

/// Nominal session descriptor returned on login.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub email: String,
    pub id: Uuid,
    pub name: String,
}

/// POST /api/auth/login
pub async fn handle_login(
    State(_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (email, password) = match (req.email, req.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ))
        }
    };

    if !email.contains('@') || password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Unauthorized);
    }

    let name = email.split('@').next().unwrap_or_default().to_string();
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: SessionUser {
            email,
            id: Uuid::new_v4(),
            name,
        },
    }))
}
