pub use rusb;
pub mod context;
pub mod decoder;
pub mod devices;
pub mod error;
pub mod models;
pub mod packet;
pub mod serializer;
