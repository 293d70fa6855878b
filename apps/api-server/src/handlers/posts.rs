//! Post engagement handlers - thin glue over `PostService`.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use pulse_shared::dto::{CreateCommentRequest, CreatePostRequest, DeleteResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts - all posts, newest first. Public.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id} - a single post. Public.
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts - create a post. Private.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create(identity.into(), body.into_inner().text)
        .await?;
    Ok(HttpResponse::Created().json(post))
}

/// DELETE /api/posts/{id} - delete an owned post. Private.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id, identity.user_id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse { deleted: true, id }))
}

/// POST /api/posts/like/{id} - like a post. Private.
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .like(path.into_inner(), identity.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/unlike/{id} - remove the caller's like. Private.
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .unlike(path.into_inner(), identity.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/comment/{id} - add a comment. Private.
pub async fn comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .comment(path.into_inner(), identity.into(), body.into_inner().text)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/comment/{id}/{comment_id} - remove a comment. Private.
pub async fn uncomment(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let post = state.posts.uncomment(post_id, comment_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use std::sync::Arc;

    use pulse_core::PostService;
    use pulse_core::domain::Post;
    use pulse_core::ports::TokenService;
    use pulse_infra::{InMemoryPostStore, JwtConfig, JwtTokenService};
    use pulse_shared::ErrorBody;
    use uuid::Uuid;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }))
    }

    fn test_state() -> AppState {
        AppState {
            posts: PostService::new(Arc::new(InMemoryPostStore::new())),
        }
    }

    macro_rules! test_app {
        ($state:expr, $tokens:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(web::Data::new($tokens))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn bearer(tokens: &Arc<dyn TokenService>, user: Uuid, name: &str) -> (&'static str, String) {
        let token = tokens.generate_token(user, name, "//avatar/test").unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    #[actix_rt::test]
    async fn list_starts_empty() {
        let app = test_app!(test_state(), token_service());

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;

        assert!(posts.is_empty());
    }

    #[actix_rt::test]
    async fn create_requires_auth() {
        let app = test_app!(test_state(), token_service());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({ "text": "no token" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_rt::test]
    async fn garbage_token_is_rejected() {
        let app = test_app!(test_state(), token_service());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .set_json(serde_json::json!({ "text": "still no" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_rt::test]
    async fn create_then_get() {
        let tokens = token_service();
        let user = Uuid::new_v4();
        let app = test_app!(test_state(), tokens.clone());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens, user, "Ada"))
            .set_json(serde_json::json!({ "text": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: Post = test::read_body_json(resp).await;

        assert_eq!(created.text, "hello");
        assert_eq!(created.user, user);
        assert_eq!(created.name, "Ada");
        assert!(created.likes.is_empty());
        assert!(created.comments.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let fetched: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.id, created.id);
    }

    #[actix_rt::test]
    async fn create_rejects_empty_text() {
        let tokens = token_service();
        let app = test_app!(test_state(), tokens.clone());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens, Uuid::new_v4(), "Ada"))
            .set_json(serde_json::json!({ "text": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.kind, "validation");
    }

    #[actix_rt::test]
    async fn get_unknown_post_is_404() {
        let app = test_app!(test_state(), token_service());

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.kind, "not_found");
    }

    #[actix_rt::test]
    async fn like_conflict_unlike_flow() {
        let tokens = token_service();
        let author = Uuid::new_v4();
        let liker = Uuid::new_v4();
        let app = test_app!(test_state(), tokens.clone());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens, author, "Ada"))
            .set_json(serde_json::json!({ "text": "hello" }))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;

        // First like lands.
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/like/{}", created.id))
            .insert_header(bearer(&tokens, liker, "Bob"))
            .to_request();
        let liked: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(liked.likes.len(), 1);
        assert_eq!(liked.likes[0].user, liker);

        // Second like by the same user conflicts.
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/like/{}", created.id))
            .insert_header(bearer(&tokens, liker, "Bob"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        // Unlike restores the pre-like state.
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/unlike/{}", created.id))
            .insert_header(bearer(&tokens, liker, "Bob"))
            .to_request();
        let unliked: Post = test::call_and_read_body_json(&app, req).await;
        assert!(unliked.likes.is_empty());

        // Unliking again conflicts.
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/unlike/{}", created.id))
            .insert_header(bearer(&tokens, liker, "Bob"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
    }

    #[actix_rt::test]
    async fn delete_enforces_ownership() {
        let tokens = token_service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let app = test_app!(test_state(), tokens.clone());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens, owner, "Ada"))
            .set_json(serde_json::json!({ "text": "mine" }))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;

        // Non-owner delete is rejected and the post survives.
        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", created.id))
            .insert_header(bearer(&tokens, stranger, "Mallory"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        // Owner delete succeeds, post is gone.
        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", created.id))
            .insert_header(bearer(&tokens, owner, "Ada"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_rt::test]
    async fn comment_then_uncomment() {
        let tokens = token_service();
        let author = Uuid::new_v4();
        let commenter = Uuid::new_v4();
        let app = test_app!(test_state(), tokens.clone());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(bearer(&tokens, author, "Ada"))
            .set_json(serde_json::json!({ "text": "discuss" }))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/comment/{}", created.id))
            .insert_header(bearer(&tokens, commenter, "Bob"))
            .set_json(serde_json::json!({ "text": "nice post" }))
            .to_request();
        let commented: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(commented.comments.len(), 1);
        assert_eq!(commented.comments[0].user, commenter);
        let comment_id = commented.comments[0].id;

        // Unknown comment id is a 404 and changes nothing.
        let req = test::TestRequest::delete()
            .uri(&format!(
                "/api/posts/comment/{}/{}",
                created.id,
                Uuid::new_v4()
            ))
            .insert_header(bearer(&tokens, commenter, "Bob"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/comment/{}/{}", created.id, comment_id))
            .insert_header(bearer(&tokens, commenter, "Bob"))
            .to_request();
        let after: Post = test::call_and_read_body_json(&app, req).await;
        assert!(after.comments.is_empty());
    }

    #[actix_rt::test]
    async fn list_returns_newest_first() {
        let tokens = token_service();
        let user = Uuid::new_v4();
        let app = test_app!(test_state(), tokens.clone());

        for text in ["first", "second"] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .insert_header(bearer(&tokens, user, "Ada"))
                .set_json(serde_json::json!({ "text": text }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text, "second");
        assert_eq!(posts[1].text, "first");
    }
}
