use std::sync::Arc;

use crate::domain::entities::post::{PostDraft, PostPatch};
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::MockPostRepository;
use crate::services::post::PostService;

fn service() -> PostService<MockPostRepository> {
    PostService::new(Arc::new(MockPostRepository::new()))
}

fn user(username: &str) -> User {
    User::new(
        format!("{}@example.com", username),
        username.to_string(),
        "hash".to_string(),
    )
}

fn draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        content: "body".to_string(),
    }
}

#[tokio::test]
async fn create_and_get_post() {
    let service = service();
    let alice = user("alice");

    let created = service.create(draft("Hello"), &alice).await.unwrap();
    let fetched = service.get(created.id).await.unwrap();

    assert_eq!(fetched.title, "Hello");
    assert_eq!(fetched.author, "alice");
    assert_eq!(fetched.author_id, alice.id);
}

#[tokio::test]
async fn get_missing_post_is_not_found() {
    let service = service();

    assert!(matches!(
        service.get(uuid::Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn author_can_update_own_post() {
    let service = service();
    let alice = user("alice");
    let created = service.create(draft("Hello"), &alice).await.unwrap();

    let updated = service
        .update(
            created.id,
            PostPatch {
                title: Some("Hello again".to_string()),
                content: None,
            },
            &alice,
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Hello again");
    assert_eq!(updated.content, "body");
}

#[tokio::test]
async fn update_is_scoped_to_the_author() {
    let service = service();
    let alice = user("alice");
    let bob = user("bob");
    let created = service.create(draft("Hello"), &alice).await.unwrap();

    assert!(matches!(
        service
            .update(created.id, PostPatch::default(), &bob)
            .await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn delete_is_scoped_to_the_author() {
    let service = service();
    let alice = user("alice");
    let bob = user("bob");
    let created = service.create(draft("Hello"), &alice).await.unwrap();

    assert!(matches!(
        service.delete(created.id, &bob).await,
        Err(DomainError::Unauthorized)
    ));

    service.delete(created.id, &alice).await.unwrap();
    assert!(service.get(created.id).await.is_err());
}

#[tokio::test]
async fn list_returns_newest_first() {
    let service = service();
    let alice = user("alice");

    service.create(draft("first"), &alice).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    service.create(draft("second"), &alice).await.unwrap();

    let posts = service.list().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "second");
    assert_eq!(posts[1].title, "first");
}
