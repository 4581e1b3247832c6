pub mod pool;
pub mod schema;

pub use pool::create_pool;
pub use schema::init_schema;
