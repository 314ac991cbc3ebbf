pub mod conf;
pub mod engine;
pub mod rewrite;
pub mod uri;
