mod mock_quiz_repository;
mod pg_pool;
mod pg_quiz_repository;

pub use mock_quiz_repository::MockQuizRepository;
pub use pg_pool::create_pool;
pub use pg_quiz_repository::PgQuizRepository;
