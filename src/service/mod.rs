pub mod cyclist;
pub mod report;
pub mod result;
pub mod scoring;
pub mod toto;
pub mod tournament;
pub mod user;
pub mod user_team;
pub mod validation;
