//! Walks through the accepted literal forms; the rejected ones are kept as
//! commented-out lines to uncomment and watch fail.

use safe_numbers::{negative, positive};

fn main() {
    // positive

    let positive_integer = positive!(42);
    println!("{positive_integer}");
    assert_eq!(positive_integer, 42);

    let positive_double = positive!(123.456);
    println!("{positive_double}");
    assert_eq!(positive_double, 123.456);

    // Fails to compile:
    // let negative_integer = positive!(-42);
    // let negative_double = positive!(-123.456);
    // let zero_integer = positive!(0);
    // let zero_double = positive!(0.0);

    // negative

    let negative_integer = negative!(-42);
    println!("{negative_integer}");
    assert_eq!(negative_integer, -42);

    let negative_double = negative!(-123.456);
    println!("{negative_double}");
    assert_eq!(negative_double, -123.456);

    // Fails to compile:
    // let positive_integer = negative!(42);
    // let positive_double = negative!(123.456);
    // let zero_integer = negative!(0);
    // let zero_double = negative!(0.0);
}
