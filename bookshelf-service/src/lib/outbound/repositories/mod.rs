pub mod book;
pub mod user;

pub use book::PostgresBookRepository;
pub use user::PostgresUserRepository;
