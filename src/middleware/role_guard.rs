//! Authorization middleware enforcing a role allow-list.
//!
//! Must run after [`AuthMiddleware`](super::AuthMiddleware): it reads the
//! identity that the authentication check attached to the request. An
//! absent identity is treated as forbidden.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::errors::ApiError;
use crate::models::{AuthenticatedUser, Role};

/// Check whether a role is a member of the allow-list.
pub fn role_permitted(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

/// Guard factory: `RequireRole::any(&[Role::Farmer])` admits only the
/// listed roles.
pub struct RequireRole {
    allowed: Rc<Vec<Role>>,
}

impl RequireRole {
    pub fn any(roles: &[Role]) -> Self {
        Self {
            allowed: Rc::new(roles.to_vec()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequireRoleService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequireRoleService {
            service: Rc::new(service),
            allowed: Rc::clone(&self.allowed),
        })
    }
}

pub struct RequireRoleService<S> {
    service: Rc<S>,
    allowed: Rc<Vec<Role>>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleService<S>
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
        let allowed = Rc::clone(&self.allowed);

        Box::pin(async move {
            let permitted = req
                .extensions()
                .get::<AuthenticatedUser>()
                .map(|identity| role_permitted(identity.role, &allowed))
                .unwrap_or(false);

            if !permitted {
                return Err(ApiError::Forbidden.into());
            }

            service.call(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::middleware::{from_fn, Next};
    use actix_web::{test, web, App, HttpResponse};
    use mongodb::bson::oid::ObjectId;

    async fn protected() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn inject_seller(
        req: ServiceRequest,
        next: Next<impl MessageBody>,
    ) -> Result<ServiceResponse<impl MessageBody>, Error> {
        req.extensions_mut().insert(AuthenticatedUser {
            id: ObjectId::new(),
            email: "seller@example.com".to_string(),
            role: Role::Seller,
        });
        next.call(req).await
    }

    #[actix_web::test]
    async fn allow_list_membership_decides() {
        assert!(role_permitted(Role::Seller, &[Role::Seller]));
        assert!(role_permitted(Role::Admin, &[Role::Admin, Role::Seller]));

        // Disjoint allow-lists always fail.
        for role in [Role::Seller, Role::Buyer, Role::Farmer, Role::Customer] {
            assert!(!role_permitted(role, &[Role::Admin]));
        }
        assert!(!role_permitted(Role::Admin, &[]));
    }

    #[actix_web::test]
    async fn seller_token_passes_seller_gate() {
        // The injector stands in for the authentication check, which runs
        // first and attaches the identity.
        let app = test::init_service(
            App::new().service(
                web::resource("/sellers-only")
                    .wrap(RequireRole::any(&[Role::Seller]))
                    .wrap(from_fn(inject_seller))
                    .route(web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/sellers-only").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn seller_identity_is_forbidden_by_admin_gate() {
        let app = test::init_service(
            App::new().service(
                web::resource("/admins-only")
                    .wrap(RequireRole::any(&[Role::Admin]))
                    .wrap(from_fn(inject_seller))
                    .route(web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/admins-only").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert!(matches!(
            err.as_error::<ApiError>(),
            Some(ApiError::Forbidden)
        ));
    }

    #[actix_web::test]
    async fn absent_identity_is_forbidden() {
        let app = test::init_service(
            App::new().service(
                web::resource("/admins-only")
                    .wrap(RequireRole::any(&[Role::Admin]))
                    .route(web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/admins-only").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert!(matches!(
            err.as_error::<ApiError>(),
            Some(ApiError::Forbidden)
        ));
    }
}
