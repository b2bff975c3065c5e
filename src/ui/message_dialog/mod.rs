pub mod messages;
pub mod model;
pub mod widget;
