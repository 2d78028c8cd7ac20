use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::config::get_config;
use crate::error::{Error, Result};
use crate::middleware::auth::{principal_from_headers, Principal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Survey,
    Question,
    Choice,
    Answer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anyone,
    Authenticated,
    Admin,
}

fn is_read(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// The whole access policy: reads and writes of each resource.
pub fn required_access(resource: Resource, method: &Method) -> Access {
    match (resource, is_read(method)) {
        (Resource::Survey, true) => Access::Authenticated,
        (Resource::Survey, false) => Access::Admin,
        (Resource::Question | Resource::Choice, true) => Access::Anyone,
        (Resource::Question | Resource::Choice, false) => Access::Authenticated,
        (Resource::Answer, true) => Access::Authenticated,
        (Resource::Answer, false) => Access::Anyone,
    }
}

impl Access {
    pub fn check(self, principal: &Principal) -> Result<()> {
        match self {
            Access::Anyone => Ok(()),
            _ if !principal.is_authenticated() => {
                Err(Error::Unauthorized("missing_authorization".into()))
            }
            Access::Admin if !principal.is_admin() => Err(Error::Forbidden("forbidden".into())),
            _ => Ok(()),
        }
    }
}

/// Runs ahead of every handler of `resource`.
pub async fn enforce_access(
    State(resource): State<Resource>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let principal = principal_from_headers(req.headers(), &get_config().jwt_secret)?;
    let required = required_access(resource, req.method());

    if let Err(err) = required.check(&principal) {
        tracing::debug!(
            ?resource,
            method = %req.method(),
            ?required,
            subject = principal.subject.as_deref().unwrap_or("-"),
            "access denied"
        );
        return Err(err);
    }

    Ok(next.run(req).await)
}
