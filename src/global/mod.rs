pub mod cors;
pub mod fault;
pub mod middleware;
pub mod shutdown;
