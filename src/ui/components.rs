pub mod auth_field;
pub mod auth_scaffold;
pub mod buttons;
pub mod page_indicator;
