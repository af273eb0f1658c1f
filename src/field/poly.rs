use crate::field::error::FieldError;

/// The IEEE CRC-32 generator with its x^32 term made explicit.
pub const GENERATOR: u64 = 0x1_04C1_1DB7;

// Multiply two polynomials modulo the CRC-32 generator
pub fn multiply_mod(mut x: u64, mut y: u64) -> u64 {
    let mut z = 0u64;
    while y != 0 {
        if y & 1 == 1 {
            z ^= x;
        }
        y >>= 1;
        x <<= 1;
        if (x >> 32) & 1 != 0 {
            x ^= GENERATOR;
        }
    }
    z
}

/// Square-and-multiply exponentiation. `y` is a plain exponent, not a
/// polynomial, so `pow_mod(2, n)` is x^n mod g(x).
pub fn pow_mod(mut x: u64, mut y: u64) -> u64 {
    let mut z = 1u64;
    while y != 0 {
        if y & 1 == 1 {
            z = multiply_mod(z, x);
        }
        x = multiply_mod(x, x);
        y >>= 1;
    }
    z
}

/// Polynomial long division over GF(2), returning `(quotient, remainder)`.
pub fn divide_and_remainder(mut x: u64, y: u64) -> Result<(u64, u64), FieldError> {
    if y == 0 {
        return Err(FieldError::DivisionByZero);
    }
    if x == 0 {
        return Ok((0, 0));
    }

    let ydeg = degree(y);
    let mut z = 0u64;
    // Runs zero times when deg(x) < deg(y).
    let mut i = degree(x) - ydeg;
    while i >= 0 {
        if (x >> (i + ydeg)) & 1 != 0 {
            x ^= y << i;
            z |= 1u64 << i;
        }
        i -= 1;
    }

    Ok((z, x))
}

/// Multiplicative inverse of `x` modulo g(x), via the extended Euclidean
/// algorithm. Only the Bezout coefficient of `x` is tracked.
pub fn reciprocal_mod(x: u64) -> Result<u64, FieldError> {
    let (mut r0, mut r1) = (GENERATOR, x);
    let (mut a, mut b) = (0u64, 1u64);

    while r1 != 0 {
        let (q, r) = divide_and_remainder(r0, r1)?;
        let c = a ^ multiply_mod(q, b);
        (r0, r1) = (r1, r);
        (a, b) = (b, c);
    }

    if r0 == 1 {
        Ok(a)
    } else {
        Err(FieldError::NoReciprocal(x))
    }
}

/// Index of the highest set bit; `-1` for the zero polynomial.
pub fn degree(x: u64) -> i32 {
    63 - x.leading_zeros() as i32
}

/// Converts between the reflected CRC register order and normal
/// polynomial order.
pub fn bit_reverse32(x: u32) -> u32 {
    x.reverse_bits()
}
