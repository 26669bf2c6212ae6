//! Unit tests for SMA indicator

use market_intel::indicators::trend::{calculate_sma, Sma};
use market_intel::indicators::Next;

#[test]
fn test_sma_undefined_until_window_full() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let sma = calculate_sma(&values, 3);
    assert_eq!(sma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_sma_period_one_is_identity() {
    let values = [3.0, 7.5, -1.0];
    let sma = calculate_sma(&values, 1);
    assert_eq!(sma, vec![Some(3.0), Some(7.5), Some(-1.0)]);
}

#[test]
fn test_sma_streaming_matches_batch() {
    let values: Vec<f64> = (0..300).map(|i| 100.0 + (i as f64 * 0.37).sin() * 5.0).collect();
    let batch = calculate_sma(&values, 50);

    let mut sma = Sma::new(50);
    assert_eq!(sma.period(), 50);
    for (i, &v) in values.iter().enumerate() {
        let streamed = sma.next(v);
        assert_eq!(streamed.is_some(), batch[i].is_some());
        if let (Some(a), Some(b)) = (streamed, batch[i]) {
            let naive: f64 = values[i + 1 - 50..=i].iter().sum::<f64>() / 50.0;
            assert!((a - b).abs() < 1e-12);
            assert!((a - naive).abs() < 1e-9);
        }
    }
}
