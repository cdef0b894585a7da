pub mod code_generator;
pub mod link_service;

pub use code_generator::{CodeGenerator, CodeRegistry};
pub use link_service::{LinkCreateResult, LinkService};
