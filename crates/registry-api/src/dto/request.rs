//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use registry_core::error::AppError;
use registry_entity::user::{NewUser, UserPatch};

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(req.name, req.email)
    }
}

/// Update user request body. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            name: req.name,
            email: req.email,
        }
    }
}

/// Authentication request body.
///
/// Carries no validation rules: any email, including an empty one, is
/// looked up and an unknown one is answered with a denial outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    /// Email to authenticate.
    pub email: String,
}

/// Session validation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSessionRequest {
    /// Token previously returned by authentication.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token_id: String,
    /// Email the token is presented for.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Runs `validator` rules and converts failures into a validation error.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(validation_error)
}

fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    fields.sort();
    AppError::validation(fields.join("; "))
}
