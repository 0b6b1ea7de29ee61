#[test]
fn trybuild() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/accepts_signed_literals.rs");
    t.compile_fail("tests/trybuild/positive_rejects_negative.rs");
    t.compile_fail("tests/trybuild/positive_rejects_zero.rs");
    t.compile_fail("tests/trybuild/negative_rejects_positive.rs");
    t.compile_fail("tests/trybuild/rejects_non_numeric.rs");
    t.compile_fail("tests/trybuild/rejects_missing_argument.rs");
}
