pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::answer;
pub use domain::question;
pub use domain::user;
pub use outbound::repositories;
