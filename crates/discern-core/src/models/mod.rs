pub mod answer_set;
pub mod evaluation;
pub mod judgment;
pub mod likelihood;
pub mod pattern;
pub mod recommendation;
pub mod scores;
pub mod session;
pub mod symptoms;
pub mod user;
