use mbstyle_expression::{compile, Compiler, Expression, Feature, RenderContext};
use proptest::prelude::*;
use serde_json::json;

fn folded_string(expression: serde_json::Value) -> String {
    match compile(&expression) {
        Ok(Expression::Literal(serde_json::Value::String(s))) => s,
        other => panic!("{} compiled to {:?}", expression, other),
    }
}

proptest! {
    #[test]
    fn rgb_is_seven_character_hex(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let color = folded_string(json!(["rgb", r, g, b]));
        prop_assert_eq!(color.len(), 7);
        prop_assert!(color.starts_with('#'));
        prop_assert_eq!(u8::from_str_radix(&color[1..3], 16).unwrap(), r);
        prop_assert_eq!(u8::from_str_radix(&color[3..5], 16).unwrap(), g);
        prop_assert_eq!(u8::from_str_radix(&color[5..7], 16).unwrap(), b);
    }

    #[test]
    fn rgb_rounds_fractional_channels(r in 0.0f64..255.0) {
        let color = folded_string(json!(["rgb", r, 0, 0]));
        let channel = u32::from_str_radix(&color[1..3], 16).unwrap();
        prop_assert_eq!(channel as f64, r.round());
    }

    #[test]
    fn integers_equal_their_float_form(n in -1_000_000i64..1_000_000) {
        let expr = json!(["==", n, n as f64]);
        prop_assert_eq!(compile(&expr), Ok(Expression::literal(true)));
    }

    #[test]
    fn booleans_never_equal_strings(b in any::<bool>()) {
        let expr = json!(["==", b, b.to_string()]);
        prop_assert_eq!(compile(&expr), Ok(Expression::literal(false)));
    }

    #[test]
    fn double_negation_is_identity(b in any::<bool>()) {
        prop_assert_eq!(compile(&json!(["!", ["!", b]])), Ok(Expression::literal(b)));
    }

    #[test]
    fn deferred_equality_matches_folded(a in -100i64..100, b in -100i64..100) {
        let compiler = Compiler::default();
        let folded = compiler.compile(&json!(["==", a, b])).unwrap();
        let deferred = compiler.compile(&json!(["==", ["get", "a"], b])).unwrap();
        let feature = Feature::new().with_property("a", a);
        let render = RenderContext::new();
        let value = compiler.evaluate(&deferred, &render.scope(&feature)).unwrap();
        prop_assert_eq!(folded, Expression::Literal(value));
    }

    #[test]
    fn step_picks_last_stop_not_above_input(input in -50.0f64..50.0) {
        let expr = json!(["step", input, "a", -10, "b", 0, "c", 10, "d"]);
        let expected = if input < -10.0 {
            "a"
        } else if input < 0.0 {
            "b"
        } else if input < 10.0 {
            "c"
        } else {
            "d"
        };
        prop_assert_eq!(compile(&expr), Ok(Expression::literal(expected)));
    }
}
