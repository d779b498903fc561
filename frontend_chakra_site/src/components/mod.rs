pub mod button;
pub mod icon;
pub mod layout;
pub mod quality_certification;
pub mod reveal;
pub mod section;
