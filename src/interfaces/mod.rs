// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod primitive;

pub use primitive::Primitive;
