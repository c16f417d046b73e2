pub mod advice;
pub mod error;
pub mod health;
pub mod root;
pub mod tags;
