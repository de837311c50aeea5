pub mod answer;
pub mod question;
pub mod user;
