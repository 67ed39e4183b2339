//! Authentication middleware for protected routes.
//!
//! Validates the bearer token from the Authorization header, resolves the
//! token's subject against the persisted user record, and attaches the
//! resulting identity to the request extensions. Failures are terminal
//! for the request: 401 for a missing or unusable credential, 404 when
//! the subject no longer exists.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use mongodb::bson::oid::ObjectId;
use std::rc::Rc;

use crate::constants::CODE_INTERNAL_ERROR;
use crate::errors::ApiError;
use crate::models::AuthenticatedUser;
use crate::repositories::UserRepository;
use crate::services::token;

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // A missing header or a non-Bearer scheme means no usable
            // credential was presented at all.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok());

            let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
                Some(token) => token.to_string(),
                None => return Err(ApiError::Unauthenticated.into()),
            };

            // Signature/format failures and expiry are distinguished by
            // the codec (InvalidToken vs TokenExpired).
            let claims = token::verify(&token)?;

            // Resolve the subject against the persisted user record; the
            // token may outlive the account it was issued for.
            let users = req
                .app_data::<web::Data<UserRepository>>()
                .ok_or_else(|| ApiError::InternalServerError {
                    code: CODE_INTERNAL_ERROR.to_string(),
                    message: "User repository is not configured".to_string(),
                })?;

            let subject_id =
                ObjectId::parse_str(&claims.sub).map_err(|_| ApiError::InvalidToken)?;

            let user = users
                .find_by_id(subject_id)
                .await?
                .ok_or(ApiError::SubjectNotFound)?;

            let identity = AuthenticatedUser {
                id: subject_id,
                email: user.email,
                role: user.role,
            };

            // Attach the claims and the resolved identity for downstream
            // handlers.
            req.extensions_mut().insert(claims);
            req.extensions_mut().insert(identity);

            service.call(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App, HttpResponse};
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    use crate::config::CONFIG;
    use crate::models::{Claims, Role};
    use crate::services::token::TOKEN_TTL_SECS;

    async fn protected() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn expired_token() -> String {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: ObjectId::new().to_hex(),
            email: "customer@example.com".to_string(),
            role: Role::Customer,
            exp: now - 10,
            iat: now - TOKEN_TTL_SECS,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    async fn gate_error(req: test::TestRequest) -> ApiError {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .route("/me", web::get().to(protected)),
            ),
        )
        .await;

        let err = test::try_call_service(&app, req.uri("/api/me").to_request())
            .await
            .unwrap_err();

        match err.as_error::<ApiError>() {
            Some(ApiError::Unauthenticated) => ApiError::Unauthenticated,
            Some(ApiError::InvalidToken) => ApiError::InvalidToken,
            Some(ApiError::TokenExpired) => ApiError::TokenExpired,
            other => panic!("unexpected gate error: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn missing_credential_is_unauthenticated() {
        let err = gate_error(test::TestRequest::get()).await;
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_unauthenticated() {
        let err = gate_error(
            test::TestRequest::get().insert_header(("Authorization", "Basic dXNlcjpwdw==")),
        )
        .await;
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[actix_web::test]
    async fn garbage_token_is_invalid() {
        let err = gate_error(
            test::TestRequest::get().insert_header(("Authorization", "Bearer not.a.token")),
        )
        .await;
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[actix_web::test]
    async fn expired_token_is_reported_as_expired() {
        let header = format!("Bearer {}", expired_token());
        let err = gate_error(
            test::TestRequest::get().insert_header(("Authorization", header)),
        )
        .await;
        assert!(matches!(err, ApiError::TokenExpired));
    }
}
