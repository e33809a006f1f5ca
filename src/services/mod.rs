pub mod relay;
pub mod scoring;
