use chrono::{SubsecRound, Utc};

use educapost_auth::Role;
use educapost_db::{Store, StoreResult};
use educapost_models::NewPost;

pub const WELCOME_TITLE: &str = "Boas-vindas ao EducaPost";
pub const WELCOME_CONTENT: &str = "Este é um post de exemplo. Edite ou crie novos posts!";

/// Publishes the welcome post as the first teacher, in the first active category.
///
/// Returns 0 when there is no teacher to own it.
pub(super) async fn seed_welcome_post(store: &dyn Store) -> StoreResult<usize> {
    let Some(teacher) = store.list_accounts(Role::Teacher).await?.into_iter().next() else {
        return Ok(0);
    };

    let category_id = store
        .list_active_categories()
        .await?
        .first()
        .map(|category| category.id);

    store
        .insert_post(NewPost {
            title: WELCOME_TITLE.to_string(),
            content: WELCOME_CONTENT.to_string(),
            category_id,
            teacher_id: teacher.id,
            created_at: Utc::now().trunc_subsecs(6),
        })
        .await?;

    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use educapost_db::MemoryStore;
    use educapost_models::{NewAccount, PostFilter};

    #[tokio::test]
    async fn test_welcome_post_needs_a_teacher() {
        let store = MemoryStore::new();
        assert_eq!(seed_welcome_post(&store).await.unwrap(), 0);
        assert_eq!(store.count_posts(&PostFilter::All).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_welcome_post_uses_first_active_category() {
        let store = MemoryStore::new();
        store.insert_category("Arquivado", 0, false);
        let active = store.insert_category("Matemática", 1, true);
        let teacher = store
            .insert_account(
                Role::Teacher,
                NewAccount {
                    name: "Profa. Ana".to_string(),
                    email: "ana@educapost.dev".to_string(),
                    password_hash: "hash".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(seed_welcome_post(&store).await.unwrap(), 1);

        let posts = store
            .list_posts(&PostFilter::All, &Default::default())
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, WELCOME_TITLE);
        assert_eq!(posts[0].category_id, Some(active.id));
        assert_eq!(posts[0].teacher_id, Some(teacher.id));
        assert_eq!(posts[0].author.as_deref(), Some("Profa. Ana"));
        assert_eq!(posts[0].created_at, posts[0].updated_at);
    }
}
