//! Evaluator tests: truth tables, trace ordering, and unbound variables.

use boolcalc::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        evaluator::{CalcProcess, Evaluator},
        lexer::Scanner,
        parser::Parser,
        value::{Bindings, Bit},
    },
};
use rstest::rstest;

use boolcalc::interpreter::value::Bit::{One, Zero};

fn expr(source: &str) -> Expr {
    Parser::new(Scanner::new(source)).parse()
                                     .unwrap_or_else(|| panic!("'{source}' should parse"))
}

fn bindings(pairs: &[(&str, Bit)]) -> Bindings {
    pairs.iter().map(|(name, bit)| ((*name).to_string(), *bit)).collect()
}

fn steps(evaluator: &Evaluator<'_>) -> Vec<String> {
    evaluator.calc_processes().iter().map(ToString::to_string).collect()
}

#[rstest]
#[case(BinaryOperator::And, Zero, Zero, Zero)]
#[case(BinaryOperator::And, Zero, One, Zero)]
#[case(BinaryOperator::And, One, Zero, Zero)]
#[case(BinaryOperator::And, One, One, One)]
#[case(BinaryOperator::Or, Zero, Zero, Zero)]
#[case(BinaryOperator::Or, Zero, One, One)]
#[case(BinaryOperator::Or, One, Zero, One)]
#[case(BinaryOperator::Or, One, One, One)]
#[case(BinaryOperator::Xor, Zero, Zero, Zero)]
#[case(BinaryOperator::Xor, Zero, One, One)]
#[case(BinaryOperator::Xor, One, Zero, One)]
#[case(BinaryOperator::Xor, One, One, Zero)]
fn binary_truth_tables(#[case] operator: BinaryOperator,
                       #[case] a: Bit,
                       #[case] b: Bit,
                       #[case] expected: Bit) {
    let bindings = bindings(&[("A", a), ("B", b)]);
    let tree = Expr::binary(operator, Expr::variable("A"), Expr::variable("B"));

    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&tree), Some(expected));
    assert!(evaluator.errors().is_empty());
    assert_eq!(evaluator.calc_processes(),
               [CalcProcess { operator: operator.to_string(),
                              left:     Some(a),
                              right:    b,
                              result:   expected,
                              index:    0, }]);
}

#[rstest]
#[case(Zero, One)]
#[case(One, Zero)]
fn not_truth_table(#[case] a: Bit, #[case] expected: Bit) {
    let bindings = bindings(&[("A", a)]);
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("NOT A")), Some(expected));
    assert_eq!(evaluator.calc_processes()[0].left, None);
    assert_eq!(steps(&evaluator), [format!("NOT {a} = {expected}")]);
}

#[test]
fn trace_is_post_order() {
    let bindings = bindings(&[("X", One), ("Y", Zero)]);
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("X OR (NOT Y)")), Some(One));
    assert_eq!(steps(&evaluator), ["NOT 0 = 1", "1 OR 1 = 1"]);
    assert_eq!(evaluator.calc_processes()[1],
               CalcProcess { operator: "OR".to_string(),
                             left:     Some(One),
                             right:    One,
                             result:   One,
                             index:    1, });
}

#[test]
fn trace_visits_left_subtree_before_right_subtree() {
    let bindings = bindings(&[("A", One), ("B", Zero), ("C", One), ("D", One)]);
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("(A AND B) XOR (NOT (C OR D))")), Some(Zero));
    assert_eq!(steps(&evaluator),
               ["1 AND 0 = 0", "1 OR 1 = 1", "NOT 1 = 0", "0 XOR 0 = 0"]);
}

#[test]
fn one_trace_entry_per_operation_node() {
    let bindings = bindings(&[("P", One), ("Q", Zero), ("R", One)]);
    let tree = expr("NOT (P AND NOT Q) OR R XOR NOT NOT P");

    fn operations(expr: &Expr) -> usize {
        match expr {
            Expr::Variable { .. } => 0,
            Expr::UnaryOperation { operand, .. } => 1 + operations(operand),
            Expr::BinaryOperation { left, right, .. } => 1 + operations(left) + operations(right),
        }
    }

    let mut evaluator = Evaluator::new(&bindings);
    assert!(evaluator.calculate(&tree).is_some());

    let indices: Vec<usize> = evaluator.calc_processes().iter().map(|p| p.index).collect();
    assert_eq!(indices, (0..operations(&tree)).collect::<Vec<_>>());
}

#[test]
fn variables_alone_record_nothing() {
    let bindings = bindings(&[("X", Zero)]);
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("X")), Some(Zero));
    assert!(evaluator.calc_processes().is_empty());
}

#[test]
fn unbound_variables_are_all_reported() {
    let bindings = Bindings::new();
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("A AND B")), None);
    assert_eq!(evaluator.error_messages(), ["Variable A not found", "Variable B not found"]);
    assert_eq!(evaluator.errors()[0],
               EvalError::UnknownVariable { name: "A".to_string() });
    assert!(evaluator.calc_processes().is_empty());
}

#[test]
fn bound_siblings_are_still_evaluated() {
    let bindings = bindings(&[("X", One), ("Y", One)]);
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("(X AND Y) OR NOT Q")), None);
    assert_eq!(steps(&evaluator), ["1 AND 1 = 1"]);
    assert_eq!(evaluator.error_messages(), ["Variable Q not found"]);
}

#[test]
fn variable_lookup_is_case_sensitive() {
    let bindings = bindings(&[("X", One)]);
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("x")), None);
    assert_eq!(evaluator.error_messages(), ["Variable x not found"]);
}

#[test]
fn trace_index_is_never_reset_within_a_run() {
    let bindings = bindings(&[("X", One), ("Y", Zero)]);
    let mut evaluator = Evaluator::new(&bindings);
    assert_eq!(evaluator.calculate(&expr("X AND Y")), Some(Zero));
    assert_eq!(evaluator.calculate(&expr("NOT Y")), Some(One));

    let (processes, errors) = evaluator.finish();
    assert!(errors.is_empty());
    assert_eq!(processes.iter().map(|p| p.index).collect::<Vec<_>>(), [0, 1]);
}
