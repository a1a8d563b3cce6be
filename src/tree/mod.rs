mod component;
mod detail;
mod layout;
mod root;
mod types;

pub use component::FamilyTree;
pub use detail::{DetailOverlay, DetailState};
pub use layout::{CoupleGroup, LayoutLimits, build_layout};
pub use root::select_root;
pub use types::{DetailRecord, PersonNode};
