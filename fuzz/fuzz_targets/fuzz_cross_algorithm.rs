#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{
    DirectMultiplier, EngineOptions, Matrix, MatrixMultiplier, StrassenEngine, SubmatrixView,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Header: size (capped at 24 for speed), threshold, parallel flag.
    let n = usize::from(data[0] % 25);
    let threshold = usize::from(data[1] % 8);
    let parallel = data[2] & 1 == 1;
    let body = &data[3..];

    let cell = |i: usize| -> i64 { body.get(i).map_or(0, |&b| i64::from(b as i8)) };
    let a_data: Vec<i64> = (0..n * n).map(cell).collect();
    let b_data: Vec<i64> = (0..n * n).map(|i| cell(i + n * n)).collect();
    let a = Matrix::from_vec(n, n, a_data).unwrap();
    let b = Matrix::from_vec(n, n, b_data).unwrap();

    let mut options = EngineOptions::default().with_threshold(threshold);
    if parallel {
        options = options.with_parallel_threshold(4);
    }
    let engine = StrassenEngine::new(options);

    let expected = DirectMultiplier.multiply(&a, &b).unwrap();
    let product = engine.multiply_matrices(&a, &b).unwrap();
    assert_eq!(product, expected, "Strassen != Direct at n={n} threshold={threshold}");

    // A view offset into a larger backing must behave like a copy of its window.
    if n > 2 {
        let view = SubmatrixView::new(&a, 1, 1, n - 1);
        let window = view.to_matrix();
        let direct = DirectMultiplier.multiply(&window, &window).unwrap();
        assert_eq!(engine.multiply(view, view), direct, "view product at n={n}");
    }
});
