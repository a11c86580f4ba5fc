//! Discounting and internal rate of return.
//!
//! IRR is solved with Newton-Raphson from a 10% guess; when Newton leaves
//! the valid range or stalls, bisection over `[-0.99, 1000]` takes over.
//! Cash flows that never change sign have no root and yield `None`.

pub const IRR_TOLERANCE: f64 = 1e-6;
pub const IRR_MAX_ITERATIONS: usize = 100;
const INITIAL_GUESS: f64 = 0.10;
const LOWER_RATE: f64 = -0.99;
const UPPER_RATE: f64 = 1000.0;

/// Net present value of `flows`, where `flows[t]` happens at year `t`.
pub fn npv_of(flows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / base.powi(t as i32))
        .sum()
}

fn npv_derivative(flows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / base.powi(t as i32 + 1))
        .sum()
}

fn changes_sign(flows: &[f64]) -> bool {
    let has_negative = flows.iter().any(|cf| *cf < 0.0);
    let has_positive = flows.iter().any(|cf| *cf > 0.0);
    has_negative && has_positive
}

fn newton_raphson(flows: &[f64]) -> Option<f64> {
    let mut rate = INITIAL_GUESS;

    for _ in 0..IRR_MAX_ITERATIONS {
        let value = npv_of(flows, rate);
        if !value.is_finite() {
            return None;
        }
        if value.abs() < IRR_TOLERANCE {
            return Some(rate);
        }

        let slope = npv_derivative(flows, rate);
        if !slope.is_finite() || slope.abs() < f64::EPSILON {
            return None;
        }

        let next = rate - value / slope;
        if !next.is_finite() || next <= LOWER_RATE || next >= UPPER_RATE {
            return None;
        }
        if (next - rate).abs() < IRR_TOLERANCE * 1e-3 {
            return Some(next);
        }
        rate = next;
    }

    None
}

fn bisection(flows: &[f64]) -> Option<f64> {
    let sign = |rate: f64| {
        let value = npv_of(flows, rate);
        if value.is_nan() {
            None
        } else {
            Some(value > 0.0)
        }
    };

    let (mut low, mut high) = (LOWER_RATE, UPPER_RATE);
    let low_positive = sign(low)?;
    if low_positive == sign(high)? {
        return None;
    }

    for _ in 0..IRR_MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let value = npv_of(flows, mid);
        // Stop at the tolerance or once the bracket cannot shrink further.
        if value.abs() < IRR_TOLERANCE || mid <= low || mid >= high {
            return Some(mid);
        }
        if (value > 0.0) == low_positive {
            low = mid;
        } else {
            high = mid;
        }
    }

    Some((low + high) / 2.0)
}

/// Internal rate of return of `flows` as a fraction.
pub fn solve_irr(flows: &[f64]) -> Option<f64> {
    if flows.len() < 2 || !changes_sign(flows) {
        return None;
    }
    newton_raphson(flows).or_else(|| bisection(flows))
}
