pub mod parts;
pub mod schema;
pub mod shapes;
pub mod validate;
