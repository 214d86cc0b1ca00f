pub mod identity;
pub mod remote;
pub mod services;
pub mod session;
