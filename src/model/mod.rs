pub mod cyclist;
pub mod report;
pub mod response;
pub mod result;
pub mod schema;
pub mod toto;
pub mod tournament;
pub mod user;
pub mod user_team;
