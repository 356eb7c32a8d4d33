mod common;

use common::api_config;
use common::mock_api::{MockApi, MockResponse};
use pagestore::model::{Post, User};
use pagestore::resource::{FetchError, Fetcher, HttpFetcher, Status, UsersController};
use pagestore::store::Store;

const USERS_JSON: &str = r#"[
    { "id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv", "phone": "010-692-6593" },
    { "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz" }
]"#;

#[tokio::test]
async fn fetches_json_array_in_received_order() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::json(USERS_JSON)).await;

    let config = api_config(&api.base_url());
    let fetcher = HttpFetcher::<User>::new(&config, &config.users_path).unwrap();
    let users = fetcher.fetch().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 2);
    assert_eq!(users[0].username, "Antonette");
    assert_eq!(users[1].email, "Sincere@april.biz");

    let requests = api.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_normalized() {
    let api = MockApi::start().await;
    let config = api_config(&format!("{}/", api.base_url()));
    let fetcher = HttpFetcher::<Post>::new(&config, &config.posts_path).unwrap();
    assert_eq!(fetcher.url(), format!("{}/posts", api.base_url()));
}

#[tokio::test]
async fn decodes_camel_case_posts() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::json(
        r#"[{ "userId": 4, "id": 31, "title": "ullam ut quidem", "body": "molestiae" }]"#,
    ))
    .await;

    let config = api_config(&api.base_url());
    let posts = HttpFetcher::<Post>::new(&config, &config.posts_path)
        .unwrap()
        .fetch()
        .await
        .unwrap();
    assert_eq!(posts[0].user_id, 4);
    assert_eq!(posts[0].id, 31);
}

#[tokio::test]
async fn error_status_is_reported() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::error(503, "maintenance")).await;

    let config = api_config(&api.base_url());
    let err = HttpFetcher::<User>::new(&config, &config.users_path)
        .unwrap()
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::json(r#"{ "users": [] }"#)).await;

    let config = api_config(&api.base_url());
    let err = HttpFetcher::<User>::new(&config, &config.users_path)
        .unwrap()
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn controller_surfaces_http_failure_as_failed_status() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::json(USERS_JSON)).await;
    api.enqueue_response(MockResponse::error(500, "boom")).await;

    let config = api_config(&api.base_url());
    let store = Store::new();
    let controller = UsersController::new(
        store.clone(),
        HttpFetcher::<User>::new(&config, &config.users_path).unwrap(),
    );

    controller.request_users().await.unwrap();
    assert_eq!(store.get_state().users.status, Status::Succeeded);

    controller.request_users().await.unwrap();
    let state = store.get_state();
    assert_eq!(state.users.status, Status::Failed);
    assert_eq!(state.users.items.len(), 2);
}
