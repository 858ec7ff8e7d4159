// ============================================================================
// Domain Models Module
// The Variant, its storage, format discriminant and configuration
// ============================================================================

pub mod config;
pub mod format;
pub mod value;
pub mod variant;

pub use config::{DivisionByZeroPolicy, InternalValuePolicy, VariantConfig};
pub use format::{Family, Format};
pub use value::Value;
pub use variant::Variant;
