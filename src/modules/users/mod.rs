pub mod model;
pub mod store;

pub use self::model::User;
pub use self::store::UserStore;
