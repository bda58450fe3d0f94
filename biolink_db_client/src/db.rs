use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct BiolinkDb {
    pub(crate) pool: PgPool,
}

impl BiolinkDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
