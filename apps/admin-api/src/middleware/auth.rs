//! Identity extractor.
//!
//! Session management lives in the fronting layer, which forwards the
//! authenticated user as `x-user-id` and `x-user-role` headers. The
//! extractor turns those into an explicit [`CurrentUser`] handed to every
//! operation, so no handler touches global auth state.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use uuid::Uuid;

use pressroom_core::domain::{CurrentUser, Role};
use pressroom_shared::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Authenticated caller identity extractor.
///
/// Use this in handlers to require an identified caller:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: CurrentUser,
}

/// Error type for identity extraction failures.
#[derive(Debug)]
pub struct IdentityError(String);

impl std::fmt::Display for IdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for IdentityError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(ErrorResponse::unauthorized().with_detail(self.0.clone()))
    }
}

impl FromRequest for Identity {
    type Error = IdentityError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identity_from_request(req))
    }
}

fn identity_from_request(req: &HttpRequest) -> Result<Identity, IdentityError> {
    let id = header_value(req, USER_ID_HEADER)
        .ok_or_else(|| IdentityError(format!("Missing {USER_ID_HEADER} header")))?;
    let id = Uuid::parse_str(id)
        .map_err(|_| IdentityError(format!("Invalid {USER_ID_HEADER} header")))?;

    let role = header_value(req, USER_ROLE_HEADER)
        .map(Role::parse)
        .ok_or_else(|| IdentityError(format!("Missing {USER_ROLE_HEADER} header")))?;

    Ok(Identity {
        user: CurrentUser { id, role },
    })
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}
