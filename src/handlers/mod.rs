pub mod health;
pub mod qualify;
