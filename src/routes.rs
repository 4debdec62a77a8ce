use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::{AppError, JSON_CONTENT_TYPE};
use crate::handlers::{comments, posts, psikologs, reports, users, wisdom};
use crate::{health_check, AppState, Result};

/// Registers the whole API on an `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| AppError::from(err).into()),
    )
    .app_data(
        web::QueryConfig::default().error_handler(|err, _req| AppError::from(err).into()),
    )
    .route("/", web::get().to(index))
    .route("/health", web::get().to(health_check))
    .service(
        web::resource("/v0/users")
            .route(web::post().to(users::create_user))
            .default_service(web::to(index)),
    )
    .service(
        web::resource("/v0/psikologs")
            .route(web::post().to(psikologs::create_psikolog))
            .default_service(web::to(index)),
    )
    .service(
        web::resource("/v0/reliever")
            .route(web::get().to(psikologs::get_reliever))
            .default_service(web::to(index)),
    )
    .service(
        web::resource("/v0/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post))
            .default_service(web::to(index)),
    )
    .service(
        web::resource("/v0/wisdom")
            .route(web::get().to(wisdom::get_wisdom))
            .route(web::post().to(wisdom::create_wisdom_point))
            .default_service(web::to(index)),
    )
    .service(
        web::resource("/v0/checkwisdom")
            .route(web::get().to(wisdom::check_wisdom))
            .default_service(web::to(index)),
    )
    .service(
        web::resource("/v0/comments")
            .route(web::post().to(comments::create_comment))
            .default_service(web::to(index)),
    )
    .service(
        web::resource("/v0/reports")
            .route(web::post().to(reports::create_report))
            .default_service(web::to(index)),
    )
    .default_service(web::to(not_found));
}

/// Headers stamped on every response.
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::SERVER, "Relieve by Sunday Code"))
        .add(("X-Wisdom-Media-Type", "relieve.v0"))
        .add((header::CONTENT_TYPE, JSON_CONTENT_TYPE))
}

/// Sends browsers to the landing page.
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, state.config.server.redirect_url.as_str()))
        .finish()
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    Err(AppError::RouteNotFound(req.path().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockStore;
    use crate::handlers::test_support::state_with;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_unknown_route() {
        let app = test::init_service(
            App::new()
                .wrap(default_headers())
                .app_data(web::Data::new(state_with(MockStore::new())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/v1/nothing").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers().get(header::SERVER).unwrap(),
            "Relieve by Sunday Code"
        );
        assert_eq!(resp.headers().get("X-Wisdom-Media-Type").unwrap(), "relieve.v0");
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "Not Found", "code": 404 }));
    }

    #[actix_web::test]
    async fn test_index_and_wrong_method_redirect() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(MockStore::new())))
                .configure(configure),
        )
        .await;

        for req in [
            test::TestRequest::get().uri("/").to_request(),
            test::TestRequest::get().uri("/v0/comments").to_request(),
            test::TestRequest::delete().uri("/v0/posts").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 302);
            assert_eq!(
                resp.headers().get(header::LOCATION).unwrap(),
                "https://sundaycode.co"
            );
        }
    }

    #[actix_web::test]
    async fn test_body_errors() {
        let mut store = MockStore::new();
        store.expect_insert_report().never();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(store)))
                .configure(configure),
        )
        .await;

        let resp = test::TestRequest::post()
            .uri("/v0/reports")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"report_user_id\": ")
            .send_request(&app)
            .await;
        assert_eq!(resp.status(), 400);

        let resp = test::TestRequest::post()
            .uri("/v0/reports")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .set_payload("report_user_id=1")
            .send_request(&app)
            .await;
        assert_eq!(resp.status(), 406);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 406);

        // Default JSON limit is 2 MiB
        let oversized = serde_json::json!({
            "report_user_id": 1,
            "report_post_id": 1,
            "padding": "x".repeat(3 * 1024 * 1024),
        });
        let resp = test::TestRequest::post()
            .uri("/v0/reports")
            .set_json(oversized)
            .send_request(&app)
            .await;
        assert_eq!(resp.status(), 413);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Payload too large.");
    }
}
