pub mod quote;
pub mod room;
pub mod stay;
