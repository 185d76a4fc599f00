pub mod access;
pub mod error;
pub mod principal;
pub mod requests;
pub mod timestamp;

// Gym domain modules (canonical locations for all domain record types)
pub mod bill;
pub mod diet;
pub mod member;
pub mod notification;
pub mod package;
pub mod supplement;

pub use access::*;
pub use error::*;
pub use principal::*;
pub use requests::*;
pub use timestamp::*;

// Re-export all domain types
pub use bill::*;
pub use diet::*;
pub use member::*;
pub use notification::*;
pub use package::*;
pub use supplement::*;
