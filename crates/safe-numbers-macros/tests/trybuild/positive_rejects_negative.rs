use safe_numbers_macros::positive;

fn main() {
    let _ = positive!(-42);
}
