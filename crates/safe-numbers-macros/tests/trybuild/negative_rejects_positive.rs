use safe_numbers_macros::negative;

fn main() {
    let _ = negative!(1.234);
}
