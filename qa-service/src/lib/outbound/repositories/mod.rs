pub mod answer;
pub mod memory;
pub mod question;
pub mod user;

pub use answer::PostgresAnswerRepository;
pub use memory::InMemoryAnswerRepository;
pub use memory::InMemoryDb;
pub use memory::InMemoryQuestionRepository;
pub use memory::InMemoryUserRepository;
pub use question::PostgresQuestionRepository;
pub use user::PostgresUserRepository;
