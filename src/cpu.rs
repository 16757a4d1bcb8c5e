//! Simulated shift-add multiplier circuit.
//!
//! The product is accumulated by adding the (doubling) multiplicand whenever
//! the low bit of the (halving) multiplier is set. Each call also produces a
//! [`Registers`] snapshot for diagnostic display; the snapshot never feeds
//! back into game logic.

/// Register state after a multiplication: the two operands and the final
/// accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub reg_a: i32,
    pub reg_b: i32,
    pub acc: i32,
}

/// Multiply two non-negative integers via shift-add.
///
/// For `b = 0` the loop never runs and the result is 0. There is no failure
/// path; input validation belongs to the caller.
pub fn multiply(a: i32, b: i32) -> (i32, Registers) {
    let mut acc = 0;
    let mut x = a;
    let mut y = b;

    while y > 0 {
        if y & 1 == 1 {
            acc += x;
        }
        x <<= 1;
        y >>= 1;
    }

    (
        acc,
        Registers {
            reg_a: a,
            reg_b: b,
            acc,
        },
    )
}
