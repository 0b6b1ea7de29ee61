use safe_numbers_macros::{negative, positive};

fn main() {
    assert_eq!(positive!(42), 42);
    assert_eq!(positive!(123.456), 123.456);
    assert_eq!(negative!(-1), -1);
    assert_eq!(negative!(-123.456), -123.456);
}
