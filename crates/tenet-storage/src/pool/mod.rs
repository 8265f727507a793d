//! Connection management. Snapshots are written rarely, so a single
//! serialized connection serves both reads and writes.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
