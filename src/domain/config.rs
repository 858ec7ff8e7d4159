// ============================================================================
// Variant Configuration
// Division-by-zero and internal-value policies carried by every Variant
// ============================================================================

use parking_lot::{const_rwlock, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Policies
// ============================================================================

/// What happens when a Variant is divided by zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivisionByZeroPolicy {
    /// Report `NumericError::DivisionByZero` to the caller
    #[default]
    Throw,

    /// Leave the receiver unmodified
    Ignore,
}

/// How an arithmetic result is stored when it leaves the receiver's range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InternalValuePolicy {
    /// Keep the width, native wraparound
    Overflow,

    /// Clamp into the format's minimum/maximum
    Saturate,

    /// Widen to the next same-signedness format that holds the result
    /// - Bool -> UInt8 -> UInt16 -> UInt32 -> UInt64
    /// - SInt8 -> SInt16 -> SInt32 -> SInt64
    /// - Floats and strings are never widened
    #[default]
    TypePromotion,
}

// ============================================================================
// Configuration
// ============================================================================

/// Arithmetic configuration held by each Variant.
///
/// New Variants copy the process-wide default (see [`VariantConfig::global`]);
/// after construction an instance only ever reads its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariantConfig {
    /// Division-by-zero handling
    pub division_by_zero: DivisionByZeroPolicy,

    /// Overflow handling
    pub internal_value: InternalValuePolicy,
}

static GLOBAL_CONFIG: RwLock<VariantConfig> = const_rwlock(VariantConfig::new());

impl VariantConfig {
    /// `Throw` on division by zero, `TypePromotion` on overflow
    pub const fn new() -> Self {
        Self {
            division_by_zero: DivisionByZeroPolicy::Throw,
            internal_value: InternalValuePolicy::TypePromotion,
        }
    }

    /// Builder method: Set the division-by-zero policy
    pub const fn with_division_by_zero(mut self, policy: DivisionByZeroPolicy) -> Self {
        self.division_by_zero = policy;
        self
    }

    /// Builder method: Set the internal value policy
    pub const fn with_internal_value(mut self, policy: InternalValuePolicy) -> Self {
        self.internal_value = policy;
        self
    }

    /// Current process-wide default used to seed new Variants
    pub fn global() -> Self {
        *GLOBAL_CONFIG.read()
    }

    /// Replace the process-wide default. Existing Variants keep their own copy.
    pub fn set_global(config: VariantConfig) {
        tracing::debug!("Variant default configuration changed: {:?}", config);
        *GLOBAL_CONFIG.write() = config;
    }

    /// Update the process-wide default in place
    pub fn update_global(update: impl FnOnce(&mut VariantConfig)) {
        let mut guard = GLOBAL_CONFIG.write();
        update(&mut *guard);
        tracing::debug!("Variant default configuration changed: {:?}", *guard);
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl VariantConfig {
    /// C-style fixed width arithmetic
    /// - Native wraparound
    /// - Division by zero reported
    pub const fn wrapping() -> Self {
        Self::new().with_internal_value(InternalValuePolicy::Overflow)
    }

    /// Clamped arithmetic
    /// - Results pinned to the format's bounds
    /// - Division by zero reported
    pub const fn saturating() -> Self {
        Self::new().with_internal_value(InternalValuePolicy::Saturate)
    }

    /// Scripting-style arithmetic
    /// - Type promotion
    /// - Division by zero silently ignored
    pub const fn lenient() -> Self {
        Self::new().with_division_by_zero(DivisionByZeroPolicy::Ignore)
    }
}
