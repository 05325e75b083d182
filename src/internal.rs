/// `a * b + c`, fused when the `fma` feature is on.
macro_rules! mul_add {
    ($a:expr, $b:expr, $c:expr) => {
        if cfg!(feature = "fma") {
            f64::mul_add($a, $b, $c)
        } else {
            $a * $b + $c
        }
    };
}

/// Evaluates a polynomial at `x` by Horner's method,
/// coefficients given from the highest degree.
macro_rules! horner {
    ($x:expr; $head:expr $(, $tail:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let x: f64 = $x;
        #[allow(unused_mut)]
        let mut acc: f64 = $head;
        $(acc = mul_add!(acc, x, $tail);)*
        acc
    }};
}

#[cfg(test)]
mod test {
    #[test]
    fn test_mul_add() {
        assert_eq!(mul_add!(2.0_f64, 3.0, 1.0), 7.0);
    }

    #[test]
    fn test_horner() {
        assert_eq!(horner!(2.0; 5.0), 5.0);
        // 3x^2 - 2x + 1
        assert_eq!(horner!(2.0; 3.0, -2.0, 1.0), 9.0);
        assert_eq!(horner!(-1.0; 1.0, 0.0, 0.0, 0.0), -1.0);
    }
}
