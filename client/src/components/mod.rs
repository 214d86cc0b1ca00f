pub mod area_nav;
pub mod cards;
pub mod gated;
