//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Top-level pages gate themselves with `components::gated::Gated`; pages
//! under an area render inside the area layout and inherit its gate.

pub mod area;
pub mod articles;
pub mod breed;
pub mod breed_explorer;
pub mod buyer_dashboard;
pub mod cattle;
pub mod disease;
pub mod events;
pub mod farmer_dashboard;
pub mod landing;
pub mod loading;
pub mod login;
pub mod not_found;
pub mod products;
pub mod settings;
pub mod signup;
