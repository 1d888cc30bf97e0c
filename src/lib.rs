pub mod commands;
pub mod health;
pub mod pricing;
pub mod report;
