use sqlx::{PgPool, QueryBuilder};

pub struct CategorySeed {
    pub label: &'static str,
    pub order: i32,
    pub is_active: bool,
}

/// Three active subjects and one retired category.
pub const DEFAULT_CATEGORIES: [CategorySeed; 4] = [
    CategorySeed {
        label: "Matemática",
        order: 1,
        is_active: true,
    },
    CategorySeed {
        label: "Português",
        order: 2,
        is_active: true,
    },
    CategorySeed {
        label: "Ciências",
        order: 3,
        is_active: true,
    },
    CategorySeed {
        label: "Arquivado",
        order: 99,
        is_active: false,
    },
];

/// Inserts [`DEFAULT_CATEGORIES`] in one multi-row statement.
pub async fn seed_categories(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut builder = QueryBuilder::new("INSERT INTO categories (label, sort_order, is_active) ");
    builder.push_values(DEFAULT_CATEGORIES.iter(), |mut row, category| {
        row.push_bind(category.label)
            .push_bind(category.order)
            .push_bind(category.is_active);
    });

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected())
}
