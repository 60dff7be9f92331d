//! Outbound ports - Interfaces that the application requires from external systems

mod storage_port;

pub use storage_port::LibraryStoragePort;
