//! Integration tests for `Compiler::compile`: constant folding, deferral to
//! runtime functions and compile-time errors, family by family.

use mbstyle_expression::families;
use mbstyle_expression::functions::math;
use mbstyle_expression::operators::DecisionOp;
use mbstyle_expression::{
    compile, functions_map, names, CompileCtx, Compiler, CompilerOptions, ExprError, Expression,
    Feature, RenderContext,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn check(expression: Value, expected: Value) {
    let result = compile(&expression)
        .unwrap_or_else(|e| panic!("compile({}) failed: {}", expression, e));
    assert_eq!(result, Expression::Literal(expected), "expression: {}", expression);
}

fn check_deferred(expression: Value, expected: Expression) {
    let result = compile(&expression)
        .unwrap_or_else(|e| panic!("compile({}) failed: {}", expression, e));
    assert_eq!(result, expected, "expression: {}", expression);
}

fn check_err(expression: Value) -> ExprError {
    compile(&expression)
        .err()
        .unwrap_or_else(|| panic!("expected error for {}", expression))
}

fn lit(value: Value) -> Expression {
    Expression::Literal(value)
}

fn prop(name: &str) -> Expression {
    Expression::property(name)
}

fn call(name: &'static str, args: Vec<Expression>) -> Expression {
    Expression::function(name, args)
}

// ------------------------------------------------------------------ Dispatch

#[test]
fn test_malformed_expression() {
    assert!(matches!(check_err(json!([])), ExprError::MalformedExpression(_)));
    assert!(matches!(check_err(json!([1, 2])), ExprError::MalformedExpression(_)));
    assert!(matches!(check_err(json!("get")), ExprError::MalformedExpression(_)));
}

#[test]
fn test_unknown_operator() {
    assert_eq!(
        check_err(json!(["concatt", "a", "b"])),
        ExprError::UnknownOperator("concatt".to_string())
    );
    assert_eq!(
        check_err(json!(["concat", ["nope"]])),
        ExprError::UnknownOperator("nope".to_string())
    );
}

#[test]
fn test_arity_is_checked_before_the_family() {
    let err = check_err(json!(["rgb", 1, 2]));
    assert_eq!(
        err,
        ExprError::Arity {
            operator: "rgb".to_string(),
            expected: "exactly 3".to_string(),
            found: 2,
        }
    );
    assert!(matches!(check_err(json!(["==", 1])), ExprError::Arity { .. }));
    assert!(matches!(check_err(json!(["zoom", 1])), ExprError::Arity { .. }));
    assert!(matches!(check_err(json!(["get"])), ExprError::Arity { .. }));
}

#[test]
fn test_variadic_operators_need_an_argument() {
    for operator in ["all", "any", "coalesce"] {
        assert_eq!(
            check_err(json!([operator])),
            ExprError::Arity {
                operator: operator.to_string(),
                expected: "at least 1".to_string(),
                found: 0,
            }
        );
    }
}

#[test]
fn test_family_rejects_foreign_operator() {
    let mut ctx = CompileCtx::new(Arc::new(functions_map()), CompilerOptions::default());
    let err = families::decision::compile(DecisionOp::All, &[json!("any"), json!(true)], &mut ctx)
        .unwrap_err();
    assert_eq!(
        err,
        ExprError::UnexpectedOperator {
            expected: "all".to_string(),
            actual: "any".to_string(),
        }
    );
}

#[test]
fn test_depth_limit() {
    let mut expr = json!(true);
    for _ in 0..200 {
        expr = json!(["!", expr]);
    }
    assert!(matches!(check_err(expr.clone()), ExprError::Resolution(_)));

    let compiler = Compiler::new(CompilerOptions {
        max_depth: 300,
        ..CompilerOptions::default()
    });
    assert_eq!(compiler.compile(&expr), Ok(lit(json!(true))));
}

#[test]
fn test_folding_can_be_disabled() {
    let compiler = Compiler::new(CompilerOptions {
        fold_constants: false,
        ..CompilerOptions::default()
    });
    let compiled = compiler.compile(&json!(["+", 1, 2])).unwrap();
    assert_eq!(compiled, call(math::ADD, vec![lit(json!(1)), lit(json!(2))]));

    let feature = Feature::new();
    let render = RenderContext::new();
    assert_eq!(compiler.evaluate(&compiled, &render.scope(&feature)), Ok(json!(3)));

    let compiled = compiler.compile(&json!(["==", 1, 1])).unwrap();
    assert_eq!(compiled, call(names::EQUAL_TO, vec![lit(json!(1)), lit(json!(1))]));
    assert_eq!(compiler.evaluate(&compiled, &render.scope(&feature)), Ok(json!(true)));

    let compiled = compiler.compile(&json!(["!=", "a", "b"])).unwrap();
    assert_eq!(
        compiled,
        call(
            names::NOT,
            vec![call(names::EQUAL_TO, vec![lit(json!("a")), lit(json!("b"))])]
        )
    );
}

#[test]
fn test_literal_branches_are_selected_without_folding() {
    let compiler = Compiler::new(CompilerOptions {
        fold_constants: false,
        ..CompilerOptions::default()
    });
    assert_eq!(compiler.compile(&json!(["case", true, "a", "b"])), Ok(lit(json!("a"))));
    assert_eq!(compiler.compile(&json!(["coalesce", null, "b"])), Ok(lit(json!("b"))));
    assert_eq!(compiler.compile(&json!(["all", true, false])), Ok(lit(json!(false))));
}

// ------------------------------------------------------------------ Decision

#[test]
fn test_double_negation() {
    check(json!(["!", ["!", true]]), json!(true));
    check(json!(["!", ["!", false]]), json!(false));
    check(json!(["!", true]), json!(false));
}

#[test]
fn test_not_requires_boolean() {
    assert!(matches!(
        check_err(json!(["!", 5])),
        ExprError::InvalidArgumentType { expected: "a boolean", found: "number", .. }
    ));
}

#[test]
fn test_not_deferred() {
    check_deferred(
        json!(["!", ["has", "x"]]),
        call(names::NOT, vec![call(names::PROPERTY_EXISTS, vec![lit(json!("x"))])]),
    );
}

#[test]
fn test_equality_is_class_aware() {
    check(json!(["==", 1, 1.0]), json!(true));
    check(json!(["==", true, "true"]), json!(false));
    check(json!(["==", "1", 1]), json!(false));
    check(json!(["==", null, null]), json!(true));
    check(json!(["==", null, 0]), json!(false));
    check(json!(["!=", "a", "b"]), json!(true));
    check(json!(["!=", 2, 2]), json!(false));
}

#[test]
fn test_equality_deferred() {
    check_deferred(
        json!(["==", ["get", "a"], 1]),
        call(names::EQUAL_TO, vec![prop("a"), lit(json!(1))]),
    );
    check_deferred(
        json!(["!=", ["get", "a"], "x"]),
        call(names::NOT, vec![call(names::EQUAL_TO, vec![prop("a"), lit(json!("x"))])]),
    );
}

#[test]
fn test_comparisons() {
    check(json!(["<", 1, 2]), json!(true));
    check(json!(["<=", 2, 2]), json!(true));
    check(json!([">", 1, 2]), json!(false));
    check(json!([">=", 3, 2.5]), json!(true));
    check(json!(["<", "apple", "banana"]), json!(true));
    assert!(matches!(check_err(json!(["<", 1, "a"])), ExprError::InvalidArgumentType { .. }));
    check_deferred(
        json!([">=", ["get", "x"], 3]),
        call(names::GREATER_EQUAL_THAN, vec![prop("x"), lit(json!(3))]),
    );
}

#[test]
fn test_all_any_constant() {
    check(json!(["all", true, true]), json!(true));
    check(json!(["all", true, false]), json!(false));
    check(json!(["any", false, false]), json!(false));
    check(json!(["any", false, true]), json!(true));
    check(json!(["all", ["==", 1, 1], ["<", 1, 2]]), json!(true));
}

#[test]
fn test_all_any_short_circuit() {
    // The third argument would fail to compile if it were reached.
    check(json!(["all", true, false, ["case", false, 1]]), json!(false));
    check(json!(["any", false, true, ["rgba", 1, 2, 3, 1]]), json!(true));
}

#[test]
fn test_all_any_deferred() {
    check_deferred(
        json!(["all", ["has", "x"], true]),
        call(
            names::ALL,
            vec![call(names::PROPERTY_EXISTS, vec![lit(json!("x"))]), lit(json!(true))],
        ),
    );
    check_deferred(
        json!(["all", ["has", "x"], false, ["get", "y"]]),
        call(
            names::ALL,
            vec![call(names::PROPERTY_EXISTS, vec![lit(json!("x"))]), lit(json!(false))],
        ),
    );
    check_deferred(
        json!(["any", ["has", "x"], ["has", "y"]]),
        call(
            names::ANY,
            vec![
                call(names::PROPERTY_EXISTS, vec![lit(json!("x"))]),
                call(names::PROPERTY_EXISTS, vec![lit(json!("y"))]),
            ],
        ),
    );
}

#[test]
fn test_all_any_reject_non_booleans() {
    assert!(matches!(
        check_err(json!(["all", 1])),
        ExprError::InvalidArgumentType { index: 1, found: "number", .. }
    ));
    assert!(matches!(
        check_err(json!(["any", false, ["concat", ["get", "a"]]])),
        ExprError::InvalidArgumentType { index: 2, found: "string", .. }
    ));
}

#[test]
fn test_case_constant() {
    check(json!(["case", false, "a", true, "b", "c"]), json!("b"));
    check(json!(["case", false, "a", "c"]), json!("c"));
    check(json!(["case", true, ["+", 1, 1], "c"]), json!(2));
    check(json!(["case", ["==", 1, 2], "a", ["==", 2, 2], "b", "c"]), json!("b"));
}

#[test]
fn test_case_exhausted() {
    assert_eq!(check_err(json!(["case", false, "a"])), ExprError::NoMatchingCase);
    assert_eq!(check_err(json!(["case", false, "a", false, "b"])), ExprError::NoMatchingCase);
}

#[test]
fn test_case_rejects_non_boolean_condition() {
    assert!(matches!(
        check_err(json!(["case", "yes", "a", "b"])),
        ExprError::InvalidArgumentType { index: 1, .. }
    ));
}

#[test]
fn test_case_deferred() {
    check_deferred(
        json!(["case", ["has", "x"], "a", false, "skipped", true, "b", "c"]),
        call(
            names::CASE,
            vec![
                call(names::PROPERTY_EXISTS, vec![lit(json!("x"))]),
                lit(json!("a")),
                lit(json!("b")),
            ],
        ),
    );
    check_deferred(
        json!(["case", ["has", "x"], "a", "c"]),
        call(
            names::CASE,
            vec![
                call(names::PROPERTY_EXISTS, vec![lit(json!("x"))]),
                lit(json!("a")),
                lit(json!("c")),
            ],
        ),
    );
}

#[test]
fn test_coalesce() {
    check(json!(["coalesce", null, null]), json!(null));
    check(json!(["coalesce", null, 3, 4]), json!(3));
    check(json!(["coalesce", ["get", "a", {"a": "x"}], "y"]), json!("x"));
    check_deferred(
        json!(["coalesce", ["get", "a"], null, "d", "e"]),
        call(names::COALESCE, vec![prop("a"), lit(json!("d"))]),
    );
}

#[test]
fn test_match_constant() {
    check(json!(["match", "b", "a", 1, ["b", "c"], 2, 0]), json!(2));
    check(json!(["match", 5, 1, "one", "other"]), json!("other"));
    check(json!(["match", 2, [1, 2], "low", 2, "two", "other"]), json!("low"));
    check(json!(["match", ["concat", "a", "b"], "ab", true, false]), json!(true));
}

#[test]
fn test_match_errors() {
    assert_eq!(check_err(json!(["match", "z", "a", 1])), ExprError::NoMatchingLabel);
    assert_eq!(
        check_err(json!(["match", true, "a", 1, 0])),
        ExprError::InvalidInputType {
            operator: "match".to_string(),
            found: "boolean",
        }
    );
    assert!(matches!(
        check_err(json!(["match", "a", {"x": 1}, 1, 0])),
        ExprError::InvalidArgumentType { index: 2, .. }
    ));
    assert!(matches!(
        check_err(json!(["match", ["get", "k"], [true], 1, 0])),
        ExprError::InvalidArgumentType { index: 2, found: "boolean", .. }
    ));
    assert!(matches!(
        check_err(json!(["match", ["has", "k"], "a", 1, 0])),
        ExprError::InvalidInputType { found: "boolean", .. }
    ));
}

#[test]
fn test_match_deferred() {
    check_deferred(
        json!(["match", ["get", "k"], "a", 1, ["b", "c"], 2, 0]),
        call(
            names::MATCH,
            vec![
                prop("k"),
                lit(json!("a")),
                lit(json!(1)),
                lit(json!(["b", "c"])),
                lit(json!(2)),
                lit(json!(0)),
            ],
        ),
    );
}

// --------------------------------------------------------------------- Color

#[test]
fn test_rgb() {
    check(json!(["rgb", 255, 0, 10]), json!("#ff000a"));
    check(json!(["rgb", 12.6, 0, 0]), json!("#0d0000"));
    check(json!(["rgb", ["+", 100, 28], 128, 128]), json!("#808080"));
}

#[test]
fn test_rgb_deferred_channel() {
    check_deferred(
        json!(["rgb", ["get", "r"], 0, 0]),
        call(
            names::CONCATENATE,
            vec![
                lit(json!("#")),
                call(
                    names::TO_HEX,
                    vec![call(math::ROUND, vec![call(names::TO_NUMBER, vec![prop("r")])])],
                ),
                lit(json!("00")),
                lit(json!("00")),
            ],
        ),
    );
}

#[test]
fn test_rgb_rejects_non_numbers() {
    assert!(matches!(
        check_err(json!(["rgb", "red", 0, 0])),
        ExprError::InvalidArgumentType { index: 1, found: "string", .. }
    ));
}

#[test]
fn test_rgba_not_supported() {
    assert_eq!(
        check_err(json!(["rgba", 1, 2, 3, 1])),
        ExprError::NotSupported("rgba".to_string())
    );
    assert_eq!(
        check_err(json!(["to-rgba", "red"])),
        ExprError::NotSupported("to-rgba".to_string())
    );
}

// -------------------------------------------------------------------- Lookup

#[test]
fn test_at() {
    check(json!(["at", 1, ["a", "b", "c"]]), json!("b"));
    check(json!(["at", ["-", 2, 2], [10, 20]]), json!(10));
    assert_eq!(
        check_err(json!(["at", 3, [1, 2, 3]])),
        ExprError::IndexOutOfBounds {
            operator: "at".to_string(),
            index: 3,
            len: 3,
        }
    );
    assert!(matches!(
        check_err(json!(["at", -1, [1]])),
        ExprError::IndexOutOfBounds { index: -1, .. }
    ));
    assert!(matches!(check_err(json!(["at", 0.5, [1]])), ExprError::InvalidArgumentType { .. }));
    assert!(matches!(
        check_err(json!(["at", ["get", "i"], [1]])),
        ExprError::InvalidArgumentType { index: 1, .. }
    ));
    assert!(matches!(
        check_err(json!(["at", 0, ["get", "list"]])),
        ExprError::InvalidArgumentType { index: 2, .. }
    ));
}

#[test]
fn test_get() {
    check_deferred(json!(["get", "name"]), prop("name"));
    check_deferred(json!(["get", ["concat", "na", "me"]]), prop("name"));
    check(json!(["get", "a", {"a": 1}]), json!(1));
    check(json!(["get", "b", {"a": 1}]), json!(null));
    assert!(matches!(check_err(json!(["get", 5])), ExprError::InvalidArgumentType { .. }));
    assert!(matches!(check_err(json!(["get", "a", [1]])), ExprError::InvalidArgumentType { .. }));
}

#[test]
fn test_has() {
    check(json!(["has", "a", {"a": 1}]), json!(true));
    check(json!(["has", "b", {"a": 1}]), json!(false));
    check_deferred(
        json!(["has", "a"]),
        call(names::PROPERTY_EXISTS, vec![lit(json!("a"))]),
    );
}

#[test]
fn test_length() {
    check(json!(["length", "Some text"]), json!(9));
    check(json!(["length", [1, 2, 3]]), json!(3));
    check(json!(["length", ["a", "b"]]), json!(2));
    check(json!(["length", ["concat", "ab", "c"]]), json!(3));
    assert!(matches!(check_err(json!(["length", 5])), ExprError::InvalidArgumentType { .. }));
    assert!(matches!(
        check_err(json!(["length", ["properties"]])),
        ExprError::InvalidArgumentType { found: "object", .. }
    ));
}

#[test]
fn test_length_deferred_picks_function_by_class() {
    check_deferred(json!(["length", ["get", "name"]]), call(names::LENGTH, vec![prop("name")]));
    check_deferred(
        json!(["length", ["concat", ["get", "a"], "x"]]),
        call(
            names::STR_LENGTH,
            vec![call(names::CONCATENATE, vec![prop("a"), lit(json!("x"))])],
        ),
    );
}

// ---------------------------------------------------------------------- Math

#[test]
fn test_arithmetic() {
    check(json!(["+", 1, 2, 3]), json!(6));
    check(json!(["-", 5]), json!(-5));
    check(json!(["-", 5, 2]), json!(3));
    check(json!(["*", 2, 3, 4]), json!(24));
    check(json!(["/", 1, 4]), json!(0.25));
    check(json!(["%", 7, 3]), json!(1));
    check(json!(["^", 2, 10]), json!(1024));
    check(json!(["/", 1, 0]), json!(null));
}

#[test]
fn test_math_functions() {
    check(json!(["sqrt", 16]), json!(4));
    check(json!(["abs", -2.5]), json!(2.5));
    check(json!(["floor", 2.7]), json!(2));
    check(json!(["ceil", 2.1]), json!(3));
    check(json!(["round", 2.5]), json!(3));
    check(json!(["max", 1, 5, 3]), json!(5));
    check(json!(["min", 4]), json!(4));
    check(json!(["log2", 8]), json!(3));
    check(json!(["log10", 100]), json!(2));
}

#[test]
fn test_math_constants() {
    check(json!(["pi"]), json!(std::f64::consts::PI));
    check(json!(["e"]), json!(std::f64::consts::E));
    check(json!(["ln2"]), json!(std::f64::consts::LN_2));
}

#[test]
fn test_math_deferred_wraps_unknown_operands() {
    check_deferred(
        json!(["+", ["get", "a"], 1]),
        call(math::ADD, vec![call(names::TO_NUMBER, vec![prop("a")]), lit(json!(1))]),
    );
    check_deferred(
        json!(["-", ["zoom"]]),
        call(
            math::NEG,
            vec![call(
                names::ZOOM_LEVEL,
                vec![
                    call(names::ENV, vec![lit(json!("wms_scale_denominator"))]),
                    lit(json!("EPSG:3857")),
                ],
            )],
        ),
    );
}

#[test]
fn test_math_coerces_results_that_may_be_null() {
    let quotient = call(
        math::DIV,
        vec![
            call(names::TO_NUMBER, vec![prop("a")]),
            call(names::TO_NUMBER, vec![prop("b")]),
        ],
    );
    check_deferred(
        json!(["+", ["/", ["get", "a"], ["get", "b"]], 1]),
        call(math::ADD, vec![call(names::TO_NUMBER, vec![quotient]), lit(json!(1))]),
    );

    let root = call("sqrt", vec![call(names::TO_NUMBER, vec![prop("a")])]);
    check_deferred(
        json!(["*", ["sqrt", ["get", "a"]], 2]),
        call(math::MUL, vec![call(names::TO_NUMBER, vec![root]), lit(json!(2))]),
    );

    let absolute = call("abs", vec![call(names::TO_NUMBER, vec![prop("a")])]);
    check_deferred(
        json!(["*", ["abs", ["get", "a"]], 2]),
        call(math::MUL, vec![absolute, lit(json!(2))]),
    );
}

#[test]
fn test_math_rejects_non_numbers() {
    assert!(matches!(
        check_err(json!(["+", "a", 1])),
        ExprError::InvalidArgumentType { index: 1, found: "string", .. }
    ));
    assert!(matches!(
        check_err(json!(["*", 2, ["concat", ["get", "a"]]])),
        ExprError::InvalidArgumentType { index: 2, found: "string", .. }
    ));
}

// -------------------------------------------------------------------- String

#[test]
fn test_strings() {
    check(json!(["concat", "a", 1, true]), json!("a1true"));
    check(json!(["concat", "x"]), json!("x"));
    check(json!(["upcase", "abc"]), json!("ABC"));
    check(json!(["downcase", "ÀBC"]), json!("àbc"));
    check_deferred(
        json!(["downcase", ["get", "x"]]),
        call(names::TO_LOWER_CASE, vec![prop("x")]),
    );
    assert!(matches!(check_err(json!(["upcase", 1])), ExprError::InvalidArgumentType { .. }));
}

// --------------------------------------------------------------------- Ramps

#[test]
fn test_interpolate_constant() {
    check(json!(["interpolate", ["linear"], 5, 0, 0, 10, 100]), json!(50));
    check(json!(["interpolate", ["linear"], -5, 0, 0, 10, 100]), json!(0));
    check(json!(["interpolate", ["linear"], 50, 0, 0, 10, 100]), json!(100));
    check(
        json!(["interpolate", ["linear"], 5, 0, [0, 10], 10, [10, 30]]),
        json!([5, 20]),
    );
}

#[test]
fn test_interpolate_deferred() {
    check_deferred(
        json!(["interpolate", ["linear"], ["get", "v"], 0, 0, 10, 100]),
        call(
            names::INTERPOLATE,
            vec![
                lit(json!(["linear"])),
                call(names::TO_NUMBER, vec![prop("v")]),
                lit(json!(0)),
                lit(json!(0)),
                lit(json!(10)),
                lit(json!(100)),
            ],
        ),
    );
}

#[test]
fn test_interpolate_errors() {
    assert!(matches!(
        check_err(json!(["interpolate", ["linear"], 1, 0, 0, 10])),
        ExprError::Arity { .. }
    ));
    assert!(matches!(
        check_err(json!(["interpolate", ["quadratic"], 1, 0, 0, 1, 1])),
        ExprError::InvalidArgumentType { index: 1, .. }
    ));
    assert!(matches!(
        check_err(json!(["interpolate", ["linear"], 1, 5, 0, 1, 1])),
        ExprError::InvalidArgumentType { index: 5, .. }
    ));
}

#[test]
fn test_step() {
    check(json!(["step", 7, "a", 5, "b", 10, "c"]), json!("b"));
    check(json!(["step", 2, "a", 5, "b"]), json!("a"));
    check(json!(["step", 10, "a", 5, "b", 10, "c"]), json!("c"));
    // Only the selected output has to be constant.
    check(json!(["step", 2, "a", 5, ["get", "x"]]), json!("a"));
    assert!(matches!(
        check_err(json!(["step", 1, "a", 5, "b", 3, "c"])),
        ExprError::InvalidArgumentType { index: 5, .. }
    ));
    assert!(matches!(
        check_err(json!(["step", 1, "a", ["get", "s"], "b"])),
        ExprError::InvalidArgumentType { index: 3, .. }
    ));
}

// ------------------------------------------------------- Zoom, feature, types

#[test]
fn test_zoom_is_never_constant() {
    check_deferred(
        json!(["zoom"]),
        call(
            names::ZOOM_LEVEL,
            vec![
                call(names::ENV, vec![lit(json!("wms_scale_denominator"))]),
                lit(json!("EPSG:3857")),
            ],
        ),
    );
}

#[test]
fn test_feature_data() {
    check_deferred(json!(["geometry-type"]), call(names::GEOMETRY_TYPE, vec![]));
    check_deferred(json!(["id"]), call(names::ID, vec![]));
    check_deferred(json!(["properties"]), call(names::PROPERTIES, vec![]));
}

#[test]
fn test_heatmap_density() {
    check_deferred(
        json!(["heatmap-density"]),
        call(names::ENV, vec![lit(json!("heatmap-density"))]),
    );
}

#[test]
fn test_types_not_supported() {
    for op in ["to-number", "literal", "typeof", "to-string", "format"] {
        assert_eq!(
            check_err(json!([op, "1"])),
            ExprError::NotSupported(op.to_string()),
            "operator {}",
            op
        );
    }
}

// ------------------------------------------------------------------ Variables

#[test]
fn test_let_var() {
    check(json!(["let", "x", 2, ["*", ["var", "x"], 3]]), json!(6));
    check(json!(["let", "x", 1, ["let", "x", 2, ["var", "x"]]]), json!(2));
    check(json!(["let", "a", 1, "b", 2, ["+", ["var", "a"], ["var", "b"]]]), json!(3));
    check_deferred(
        json!(["let", "a", ["get", "p"], ["concat", ["var", "a"], "!"]]),
        call(names::CONCATENATE, vec![prop("p"), lit(json!("!"))]),
    );
}

#[test]
fn test_var_unbound() {
    assert_eq!(check_err(json!(["var", "y"])), ExprError::UnboundVariable("y".to_string()));
    // Bindings do not see each other.
    assert_eq!(
        check_err(json!(["let", "a", 1, "b", ["var", "a"], ["var", "b"]])),
        ExprError::UnboundVariable("a".to_string())
    );
    // Scope ends with the body.
    assert_eq!(
        check_err(json!(["concat", ["let", "a", "x", ["var", "a"]], ["var", "a"]])),
        ExprError::UnboundVariable("a".to_string())
    );
}

#[test]
fn test_let_errors() {
    assert!(matches!(check_err(json!(["let", 1, 2, 3])), ExprError::InvalidArgumentType { .. }));
    assert!(matches!(check_err(json!(["let", "a", 1, "b", 3])), ExprError::Arity { .. }));
}

// ---------------------------------------------------------------- Error text

#[test]
fn test_error_messages() {
    assert_eq!(
        check_err(json!(["nope"])).to_string(),
        "Expression \"nope\" invalid."
    );
    assert_eq!(
        check_err(json!(["rgba", 0, 0, 0, 1])).to_string(),
        "\"rgba\" expressions are not supported."
    );
    assert_eq!(
        check_err(json!(["all", 1])).to_string(),
        "\"all\" argument #1 must be a boolean, found number."
    );
}
