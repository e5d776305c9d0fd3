pub mod cyclist;
pub mod handler;
pub mod report;
pub mod result;
pub mod toto;
pub mod tournament;
pub mod user;
pub mod user_team;
