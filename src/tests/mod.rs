#[cfg(test)]
pub mod common;

pub mod metadata_init_flow;
