pub mod hash;
pub mod json;
pub mod path;
pub mod time;
