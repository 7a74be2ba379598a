pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod emitter;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
pub mod output;
pub mod resolver;
pub mod schema;
pub(crate) mod selector;

#[cfg(test)]
pub(crate) mod tests;

pub use metrics::{GenerationStats, GenerationWarning};
pub use orchestrator::{GeneratedFile, GeneratedFinalOutput, Orchestrator};
pub use output::{OutputLayout, PathsMode};
pub use resolver::ResolverConfig;
pub use schema::SchemaSet;
