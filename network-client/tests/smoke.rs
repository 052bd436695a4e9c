use std::time::{SystemTime, UNIX_EPOCH};

use network_client::{NetworkClient, NetworkClientError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server and database"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("NETWORK_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut client = NetworkClient::new(base_url);

    let suffix = unique_suffix();
    let username = format!("http_user_{suffix}");
    let email = format!("http_{suffix}@example.com");
    let password = "password123";

    let user = client
        .signup(&username, &email, password)
        .await
        .expect("signup must succeed");
    assert_eq!(user.username, username);
    assert!(client.get_token().is_none());

    let pair = client
        .obtain_token(&username, password)
        .await
        .expect("obtain_token must succeed");
    assert!(!pair.access.is_empty());
    assert!(!pair.refresh.is_empty());
    assert!(client.get_token().is_some());

    let refreshed = client
        .refresh_access_token()
        .await
        .expect("refresh must succeed");
    assert!(!refreshed.is_empty());

    let created = client
        .create_post("http smoke message")
        .await
        .expect("create_post must succeed");
    assert_eq!(created.message, "http smoke message");

    let posts = client
        .last_posts(Some(20))
        .await
        .expect("last_posts must succeed");
    assert!(posts.iter().any(|post| post.id == created.id));

    let like = client
        .like_post(created.id, "LIKE")
        .await
        .expect("like_post must succeed");
    assert_eq!(like.message, created.id);
    assert!(like.eval);

    let likes = client
        .last_likes(Some(20))
        .await
        .expect("last_likes must succeed");
    assert!(likes.iter().any(|item| item.id == like.id));

    let bad_eval = client.like_post(created.id, "maybe").await;
    assert!(matches!(bad_eval, Err(NetworkClientError::NotAcceptable(_))));

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let days = client
        .analytics(Some(today.as_str()), Some(today.as_str()))
        .await
        .expect("analytics must succeed");
    assert!(days.iter().any(|day| day.likes > 0));

    let bad_range = client
        .analytics(Some("01-03-2024"), Some(today.as_str()))
        .await;
    assert!(matches!(bad_range, Err(NetworkClientError::NotAcceptable(_))));

    let result = client
        .unlike_post(created.id)
        .await
        .expect("unlike_post must succeed");
    assert_eq!(result, "Like deleted.");

    let missing = client.unlike_post(created.id).await;
    assert!(matches!(missing, Err(NetworkClientError::NotFound)));

    // activity/statistic закрыты для обычных пользователей
    let activity = client.user_activity(user.id).await;
    assert!(matches!(activity, Err(NetworkClientError::Unauthorized)));

    let statistic = client.statistic().await;
    assert!(matches!(statistic, Err(NetworkClientError::Unauthorized)));
}
