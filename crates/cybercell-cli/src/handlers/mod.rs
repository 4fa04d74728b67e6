pub mod browse;
pub mod init;
pub mod render;
pub mod resolve;
pub mod routes;
