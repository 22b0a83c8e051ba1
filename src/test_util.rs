#[macro_export]
macro_rules! assert_approx_complex_eq {
    ($expected_re:expr, $expected_im:expr, $actual:expr) => {{
        use num_complex::Complex;
        #[inline(always)]
        pub fn approx_eq(
            expected_re: f64,
            expected_im: f64,
            actual: Complex<f64>,
            eps: f64,
        ) -> bool {
            (expected_re - actual.re).abs() < eps && (expected_im - actual.im).abs() < eps
        }

        let actual: Complex<f64> = $actual;
        assert!(
            approx_eq($expected_re, $expected_im, actual, 1e-8),
            "Expected {}+{}i,  but got {}",
            $expected_re,
            $expected_im,
            actual
        );
    }};
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($expected:expr, $actual:expr) => {{
        let expected: f64 = $expected;
        let actual: f64 = $actual;
        assert!(
            (expected - actual).abs() < 1e-8,
            "Expected {},  but got {}",
            expected,
            actual
        );
    }};
}

/// Element-wise comparison of probability vectors.
#[macro_export]
macro_rules! assert_probabilities {
    ($expected:expr, $actual:expr) => {{
        let expected: &[f64] = &$expected;
        let actual: &[f64] = &$actual;
        assert_eq!(
            expected.len(),
            actual.len(),
            "Expected {:?},  but got {:?}",
            expected,
            actual
        );
        for (e, a) in expected.iter().zip(actual.iter()) {
            assert!(
                (e - a).abs() < 1e-8,
                "Expected {:?},  but got {:?}",
                expected,
                actual
            );
        }
    }};
}
