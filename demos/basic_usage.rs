// ============================================================================
// Basic Usage Example
// ============================================================================

use scalar_variant::prelude::*;

fn show(label: &str, v: &Variant) {
    println!("  {:<28} {:>22}  ({})", label, v.to_string(), v.format());
}

fn main() {
    #[cfg(feature = "logging")]
    scalar_variant::utils::init_logging(tracing::Level::TRACE);

    println!("=== Scalar Variant Example ===\n");

    // Mixed signedness promotes to a signed format wide enough to hold the result
    println!("Mixed-format arithmetic:");
    let mut v = Variant::from(250u8);
    v += 10i8;
    show("250u8 += 10i8", &v);

    let mut v = Variant::from(4u16);
    v *= 10i16;
    show("4u16 *= 10i16", &v);

    let mut v = Variant::from(5u8);
    v /= 2u8;
    show("5u8 /= 2u8", &v);

    // Text joins arithmetic when it parses exactly, otherwise it concatenates
    println!("\nText operands:");
    let mut v = Variant::from("5");
    v += 1i32;
    show("\"5\" += 1i32", &v);

    let mut v = Variant::from("foo");
    v += 1i32;
    show("\"foo\" += 1i32", &v);

    for text in ["true", "-7", "300", "70000", "0.1", "3.141592653589793", "1.0"] {
        show(&format!("parse({:?})", text), &Variant::parse(text));
    }

    // Overflow handling is per instance
    println!("\nInternal value policies for 250u8 + 10u8:");
    for (name, config) in [
        ("Overflow", VariantConfig::wrapping()),
        ("Saturate", VariantConfig::saturating()),
        ("TypePromotion", VariantConfig::new()),
    ] {
        let mut v = Variant::from(250u8).with_config(config);
        v += 10u8;
        show(name, &v);
    }

    // Division by zero
    println!("\nDivision by zero:");
    let mut v = Variant::from(5u8);
    match v.try_div(0u8) {
        Ok(()) => show("Throw", &v),
        Err(err) => println!("  {:<28} {:>22}", "Throw", err),
    }
    let mut v = Variant::from(5u8).with_config(VariantConfig::lenient());
    v /= 0u8;
    show("Ignore", &v);

    // Comparisons work across formats
    println!("\nComparison:");
    let pairs = [
        (Variant::from(-1i8), Variant::from(u64::MAX)),
        (Variant::from("10"), Variant::from(9.5f64)),
        (Variant::from(u64::MAX), Variant::from(18_446_744_073_709_551_616.0f64)),
        (Variant::from("apple"), Variant::from("banana")),
    ];
    for (lhs, rhs) in &pairs {
        println!("  compare({}, {}) = {}", lhs, rhs, lhs.compare(rhs));
    }
}
