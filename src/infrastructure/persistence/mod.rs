mod pg_keyword_repository;
mod pg_pool;

pub use pg_keyword_repository::PgKeywordRepository;
pub use pg_pool::create_pool;
