pub mod profiles;
pub mod query;
pub mod select;
pub mod serve;
