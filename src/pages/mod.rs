pub mod family_tree;
pub mod home;
pub mod not_found;
