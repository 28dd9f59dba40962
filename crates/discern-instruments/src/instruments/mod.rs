pub mod asrs;
pub mod gad7;
pub mod phq9;
