/*!
 * Process Module
 * Process records and synthetic batch generation
 */

pub mod generator;
pub mod types;

pub use generator::{GeneratorBounds, ProcessGenerator};
pub use types::{validate_batch, Process};
