pub mod activity;
pub mod diet;
pub mod mental_health;
pub mod sleep;
