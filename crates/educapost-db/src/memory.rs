//! In-process [`Store`] used by tests and local experiments.
//!
//! Mirrors the PostgreSQL semantics that matter to callers: per-role unique
//! emails, owner name resolved at read time, teacher deletion orphaning their
//! posts, stable ordering with an id tiebreak. Every call is counted so tests
//! can assert that a request never reached the store.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use educapost_auth::Role;
use educapost_core::{PageRequest, SortColumn, SortOrder};
use educapost_models::{
    Account, AccountChanges, Category, NewAccount, NewPost, Post, PostChanges, PostFilter,
};

use crate::store::{Store, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    teachers: Vec<Account>,
    students: Vec<Account>,
    /// Stored without `author`; it is filled in on read.
    posts: Vec<Post>,
    next_category_id: i32,
    next_teacher_id: i32,
    next_student_id: i32,
    next_post_id: i32,
}

impl Tables {
    fn accounts(&self, role: Role) -> &Vec<Account> {
        match role {
            Role::Teacher => &self.teachers,
            Role::Student => &self.students,
        }
    }

    fn accounts_mut(&mut self, role: Role) -> &mut Vec<Account> {
        match role {
            Role::Teacher => &mut self.teachers,
            Role::Student => &mut self.students,
        }
    }

    fn next_account_id(&mut self, role: Role) -> i32 {
        let counter = match role {
            Role::Teacher => &mut self.next_teacher_id,
            Role::Student => &mut self.next_student_id,
        };
        *counter += 1;
        *counter
    }

    fn with_author(&self, post: &Post) -> Post {
        let author = post
            .teacher_id
            .and_then(|id| self.teachers.iter().find(|t| t.id == id))
            .map(|t| t.name.clone());
        Post {
            author,
            ..post.clone()
        }
    }

    fn matching_posts(&self, filter: &PostFilter) -> Vec<&Post> {
        match filter {
            PostFilter::All => self.posts.iter().collect(),
            PostFilter::Search(term) => {
                let needle = term.to_lowercase();
                self.posts
                    .iter()
                    .filter(|p| {
                        p.title.to_lowercase().contains(&needle)
                            || p.content.to_lowercase().contains(&needle)
                    })
                    .collect()
            }
        }
    }

    fn email_taken(&self, role: Role, email: &str, except: Option<i32>) -> bool {
        self.accounts(role)
            .iter()
            .any(|a| a.email == email && Some(a.id) != except)
    }
}

fn unique_email(role: Role) -> StoreError {
    StoreError::UniqueViolation(format!("{}s_email_key", role.as_str()))
}

fn compare_posts(a: &Post, b: &Post, sort: SortColumn) -> Ordering {
    let primary = match sort {
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortColumn::Title => a.title.cmp(&b.title),
    };
    primary.then(a.id.cmp(&b.id))
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    writes: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails with [`StoreError::Unavailable`] while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    /// Number of trait calls made so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    /// Number of successful mutating calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(AtomicOrdering::SeqCst)
    }

    pub fn reset_counters(&self) {
        self.calls.store(0, AtomicOrdering::SeqCst);
        self.writes.store(0, AtomicOrdering::SeqCst);
    }

    /// Seeds a category directly. Not counted as a store call.
    pub fn insert_category(&self, label: &str, order: i32, is_active: bool) -> Category {
        let mut tables = self.lock();
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            label: label.to_string(),
            order,
            is_active,
        };
        tables.categories.push(category.clone());
        category
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn enter(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(self.lock())
    }

    fn wrote(&self) {
        self.writes.fetch_add(1, AtomicOrdering::SeqCst);
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_active_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.enter()?;
        let mut categories: Vec<Category> = tables
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.order.cmp(&b.order).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let tables = self.enter()?;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn is_active_category(&self, id: i32) -> StoreResult<bool> {
        let tables = self.enter()?;
        Ok(tables.categories.iter().any(|c| c.id == id && c.is_active))
    }

    async fn count_posts(&self, filter: &PostFilter) -> StoreResult<i64> {
        let tables = self.enter()?;
        Ok(tables.matching_posts(filter).len() as i64)
    }

    async fn list_posts(&self, filter: &PostFilter, page: &PageRequest) -> StoreResult<Vec<Post>> {
        let tables = self.enter()?;
        let mut posts = tables.matching_posts(filter);
        posts.sort_by(|a, b| {
            let ordering = compare_posts(a, b, page.sort);
            match page.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(0);
        Ok(posts
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|p| tables.with_author(p))
            .collect())
    }

    async fn find_post(&self, id: i32) -> StoreResult<Option<Post>> {
        let tables = self.enter()?;
        Ok(tables
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| tables.with_author(p)))
    }

    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        let mut tables = self.enter()?;
        tables.next_post_id += 1;
        let row = Post {
            id: tables.next_post_id,
            title: post.title,
            content: post.content,
            author: None,
            category_id: post.category_id,
            teacher_id: Some(post.teacher_id),
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        tables.posts.push(row.clone());
        self.wrote();
        Ok(tables.with_author(&row))
    }

    async fn update_post(&self, id: i32, changes: PostChanges) -> StoreResult<Option<Post>> {
        let mut tables = self.enter()?;
        let Some(row) = tables.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        row.title = changes.title;
        row.content = changes.content;
        row.category_id = changes.category_id;
        row.updated_at = changes.updated_at;
        let row = row.clone();
        self.wrote();
        Ok(Some(tables.with_author(&row)))
    }

    async fn delete_post(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.enter()?;
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        let removed = tables.posts.len() < before;
        if removed {
            self.wrote();
        }
        Ok(removed)
    }

    async fn list_accounts(&self, role: Role) -> StoreResult<Vec<Account>> {
        let tables = self.enter()?;
        let mut accounts = tables.accounts(role).clone();
        accounts.sort_by_key(|a| a.id);
        Ok(accounts)
    }

    async fn find_account(&self, role: Role, id: i32) -> StoreResult<Option<Account>> {
        let tables = self.enter()?;
        Ok(tables.accounts(role).iter().find(|a| a.id == id).cloned())
    }

    async fn find_account_by_email(
        &self,
        role: Role,
        email: &str,
    ) -> StoreResult<Option<Account>> {
        let tables = self.enter()?;
        Ok(tables
            .accounts(role)
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn insert_account(&self, role: Role, account: NewAccount) -> StoreResult<Account> {
        let mut tables = self.enter()?;
        if tables.email_taken(role, &account.email, None) {
            return Err(unique_email(role));
        }
        let created = Account {
            id: tables.next_account_id(role),
            name: account.name,
            email: account.email,
            password_hash: account.password_hash,
            created_at: Utc::now(),
        };
        tables.accounts_mut(role).push(created.clone());
        self.wrote();
        Ok(created)
    }

    async fn update_account(
        &self,
        role: Role,
        id: i32,
        changes: AccountChanges,
    ) -> StoreResult<Option<Account>> {
        let mut tables = self.enter()?;
        if tables.email_taken(role, &changes.email, Some(id)) {
            return Err(unique_email(role));
        }
        let Some(account) = tables.accounts_mut(role).iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        account.name = changes.name;
        account.email = changes.email;
        if let Some(hash) = changes.password_hash {
            account.password_hash = hash;
        }
        let updated = account.clone();
        self.wrote();
        Ok(Some(updated))
    }

    async fn delete_account(&self, role: Role, id: i32) -> StoreResult<bool> {
        let mut tables = self.enter()?;
        let accounts = tables.accounts_mut(role);
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        let removed = accounts.len() < before;
        if removed && role == Role::Teacher {
            for post in tables.posts.iter_mut().filter(|p| p.teacher_id == Some(id)) {
                post.teacher_id = None;
            }
        }
        if removed {
            self.wrote();
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn new_account(name: &str, email: &str) -> NewAccount {
        NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn new_post(title: &str, teacher_id: i32, minutes_ago: i64) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: format!("{title} content"),
            category_id: None,
            teacher_id,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_categories_sorted_and_filtered() {
        let store = MemoryStore::new();
        store.insert_category("Ciências", 3, true);
        store.insert_category("Arquivado", 0, false);
        store.insert_category("Matemática", 1, true);

        let active = store.list_active_categories().await.unwrap();
        let labels: Vec<_> = active.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Matemática", "Ciências"]);
        assert!(!store.is_active_category(2).await.unwrap());
        assert!(store.find_category(2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_emails_unique_per_role() {
        let store = MemoryStore::new();
        store
            .insert_account(Role::Teacher, new_account("Ana", "ana@educapost.dev"))
            .await
            .unwrap();
        let err = store
            .insert_account(Role::Teacher, new_account("Ana 2", "ana@educapost.dev"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)));

        store
            .insert_account(Role::Student, new_account("Ana", "ana@educapost.dev"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_posts_sorts_and_pages() {
        let store = MemoryStore::new();
        let teacher = store
            .insert_account(Role::Teacher, new_account("Ana", "ana@educapost.dev"))
            .await
            .unwrap();
        for (title, age) in [("Bravo", 3), ("Alpha", 2), ("Charlie", 1)] {
            store.insert_post(new_post(title, teacher.id, age)).await.unwrap();
        }

        let page = PageRequest::default();
        let newest_first = store.list_posts(&PostFilter::All, &page).await.unwrap();
        let titles: Vec<_> = newest_first.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Charlie", "Alpha", "Bravo"]);
        assert_eq!(newest_first[0].author.as_deref(), Some("Ana"));

        let page = PageRequest {
            sort: SortColumn::Title,
            order: SortOrder::Asc,
            limit: 2,
            offset: 1,
            page: 1,
        };
        let titles: Vec<_> = store
            .list_posts(&PostFilter::All, &page)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Bravo", "Charlie"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let store = MemoryStore::new();
        store.insert_post(new_post("Frações", 1, 1)).await.unwrap();
        store.insert_post(new_post("Geometria", 1, 1)).await.unwrap();

        let filter = PostFilter::Search("FRAÇ".to_string());
        assert_eq!(store.count_posts(&filter).await.unwrap(), 1);
        let filter = PostFilter::Search("content".to_string());
        assert_eq!(store.count_posts(&filter).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_deleting_teacher_orphans_posts() {
        let store = MemoryStore::new();
        let teacher = store
            .insert_account(Role::Teacher, new_account("Ana", "ana@educapost.dev"))
            .await
            .unwrap();
        let post = store.insert_post(new_post("Alpha", teacher.id, 0)).await.unwrap();

        assert!(store.delete_account(Role::Teacher, teacher.id).await.unwrap());
        let orphan = store.find_post(post.id).await.unwrap().unwrap();
        assert_eq!(orphan.teacher_id, None);
        assert_eq!(orphan.author, None);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_and_counts() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        let err = store.find_post(1).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));
        assert_eq!(store.call_count(), 1);
        assert_eq!(store.write_count(), 0);
    }
}
