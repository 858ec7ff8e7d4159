use parking_lot::{const_mutex, Mutex};
use scalar_variant::prelude::*;

// The process default is shared by every test in this binary
static DEFAULTS: Mutex<()> = const_mutex(());

fn with_defaults(test: impl FnOnce()) {
    let _guard = DEFAULTS.lock();
    test();
    VariantConfig::set_global(VariantConfig::new());
}

#[test]
fn test_ignore_policy_leaves_receiver_unchanged() {
    with_defaults(|| {
        Variant::set_division_by_zero_policy(DivisionByZeroPolicy::Ignore);
        assert_eq!(Variant::division_by_zero_policy(), DivisionByZeroPolicy::Ignore);

        let mut v = Variant::from(5u8);
        v /= 0u8;
        assert_eq!(v.value(), &Value::UInt8(5));
    });
}

#[test]
fn test_default_only_seeds_new_variants() {
    with_defaults(|| {
        let before = Variant::from(250u8);

        Variant::set_internal_value_policy(InternalValuePolicy::Saturate);
        assert_eq!(Variant::internal_value_policy(), InternalValuePolicy::Saturate);
        let after = Variant::from(250u8);

        assert_eq!(before.config().internal_value, InternalValuePolicy::TypePromotion);
        assert_eq!((before + 10u8).value(), &Value::UInt16(260));
        assert_eq!((after + 10u8).value(), &Value::UInt8(255));
    });
}

#[test]
fn test_setters_update_one_field() {
    with_defaults(|| {
        Variant::set_internal_value_policy(InternalValuePolicy::Overflow);
        Variant::set_division_by_zero_policy(DivisionByZeroPolicy::Ignore);

        let config = Variant::new().config();
        assert_eq!(config.internal_value, InternalValuePolicy::Overflow);
        assert_eq!(config.division_by_zero, DivisionByZeroPolicy::Ignore);
    });
}

#[test]
fn test_throw_is_the_default() {
    with_defaults(|| {
        assert_eq!(Variant::division_by_zero_policy(), DivisionByZeroPolicy::Throw);
        let mut v = Variant::from(5u8);
        assert_eq!(v.try_div(0u8), Err(NumericError::DivisionByZero));
    });
}
