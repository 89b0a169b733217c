pub mod hello;
pub mod matches;
pub mod subscribe;

pub use hello::hello;
pub use matches::matches;
pub use subscribe::subscribe;
