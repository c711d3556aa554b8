//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header and runs it
//! through the core access gate (blacklist check first, then signature
//! verification, then subject resolution). On success the resolved
//! identity, including the raw token a later logout needs, is injected
//! into the request extensions.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use ink_core::domain::entities::user::User;
use ink_core::services::session::{AuthenticatedUser, RequestAuthenticator};

use crate::handlers::error::{handle_domain_error, unauthorized_response};

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The resolved user record
    pub user: User,
    /// The raw access token the request presented
    pub token: String,
}

impl From<AuthenticatedUser> for AuthContext {
    fn from(authenticated: AuthenticatedUser) -> Self {
        Self {
            user: authenticated.user,
            token: authenticated.token,
        }
    }
}

/// JWT authentication middleware factory
///
/// Wrap this around any scope whose routes require a valid access token.
/// The gate itself is resolved from app data so the middleware stays
/// independent of the concrete repository and store types.
#[derive(Default)]
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(
                        InternalError::from_response("missing bearer", unauthorized_response())
                            .into(),
                    );
                }
            };

            let gate = match req
                .app_data::<actix_web::web::Data<Arc<dyn RequestAuthenticator>>>()
            {
                Some(gate) => gate.get_ref().clone(),
                None => {
                    log::error!("RequestAuthenticator not registered in app data");
                    return Err(InternalError::from_response(
                        "gate missing",
                        handle_domain_error(&ink_core::errors::DomainError::Internal {
                            message: "authentication not configured".to_string(),
                        }),
                    )
                    .into());
                }
            };

            match gate.authenticate(&token).await {
                Ok(authenticated) => {
                    req.extensions_mut().insert(AuthContext::from(authenticated));
                    service.call(req).await
                }
                Err(error) => Err(InternalError::from_response(
                    "authentication failed",
                    handle_domain_error(&error),
                )
                .into()),
            }
        })
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                InternalError::from_response("authentication required", unauthorized_response())
                    .into()
            });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[::core::prelude::v1::test]
    fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
