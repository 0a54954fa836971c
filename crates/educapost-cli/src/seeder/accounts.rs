use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};

use educapost_auth::Role;
use educapost_db::{Store, StoreResult};
use educapost_models::NewAccount;

pub type AccountSeed = NewAccount;

/// The primary account for `role` followed by `extra` fake ones.
///
/// Extra emails are derived from the generated name plus a running index,
/// so they stay unique within one batch.
pub fn generate_accounts(
    role: Role,
    primary_email: &str,
    extra: usize,
    password_hash: &str,
) -> Vec<AccountSeed> {
    let mut accounts = Vec::with_capacity(extra + 1);
    accounts.push(AccountSeed {
        name: fake_name(),
        email: primary_email.to_string(),
        password_hash: password_hash.to_string(),
    });

    for idx in 0..extra {
        let first_name: String = FirstName().fake();
        let last_name: String = LastName().fake();
        let email = format!(
            "{}.{}+{}{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            role.as_str(),
            idx + 1
        );
        accounts.push(AccountSeed {
            name: format!("{first_name} {last_name}"),
            email,
            password_hash: password_hash.to_string(),
        });
    }

    accounts
}

pub(super) async fn insert_accounts(
    store: &dyn Store,
    role: Role,
    accounts: Vec<AccountSeed>,
) -> StoreResult<usize> {
    let mut inserted = 0;
    for account in accounts {
        store.insert_account(role, account).await?;
        inserted += 1;
    }
    Ok(inserted)
}

fn fake_name() -> String {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    format!("{first_name} {last_name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use educapost_db::MemoryStore;

    #[test]
    fn test_primary_account_comes_first() {
        let accounts = generate_accounts(Role::Teacher, "professor@educapost.dev", 2, "hash");
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0].email, "professor@educapost.dev");
        assert!(accounts.iter().all(|a| a.password_hash == "hash"));
        assert!(accounts[1].email.contains("+teacher1@"));
        assert!(accounts[2].email.contains("+teacher2@"));
    }

    #[tokio::test]
    async fn test_insert_accounts_counts_rows() {
        let store = MemoryStore::new();
        let accounts = generate_accounts(Role::Student, "aluno@educapost.dev", 4, "hash");

        let inserted = insert_accounts(&store, Role::Student, accounts).await.unwrap();
        assert_eq!(inserted, 5);
        assert_eq!(store.list_accounts(Role::Student).await.unwrap().len(), 5);
    }
}
