pub mod category;
pub mod counts;
pub mod snippet;
