pub mod cyclist;
pub mod database;
pub mod migrations;
pub mod report;
pub mod result;
pub mod toto;
pub mod tournament;
pub mod user;
pub mod user_team;
