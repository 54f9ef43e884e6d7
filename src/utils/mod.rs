pub mod rating;
pub mod time;
pub mod validation;
