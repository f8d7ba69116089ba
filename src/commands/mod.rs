pub mod keepalive;

pub use keepalive::execute_keepalive;
