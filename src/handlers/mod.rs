pub mod generate_handlers;
pub mod health;
