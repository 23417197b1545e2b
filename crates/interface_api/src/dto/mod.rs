//! Request and response bodies

pub mod quote;
pub mod reference;
