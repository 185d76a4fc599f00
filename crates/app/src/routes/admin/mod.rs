pub mod bills;
pub mod dashboard;
pub mod diet;
pub mod login;
pub mod members;
pub mod packages;
pub mod reports;
pub mod supplements;
