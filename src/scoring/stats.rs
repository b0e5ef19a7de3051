//! @ai:module:intent Minimal two-sample statistics for comparing the top two tools
//! @ai:module:layer domain
//! @ai:module:public_api mean, sample_variance, welch_t_test, PLACEHOLDER_P_VALUE
//! @ai:module:stateless true

/// Fixed p-value reported until the t-statistic is converted through a
/// Student-t CDF. Recommendation wording depends on it, so it stays fixed.
pub const PLACEHOLDER_P_VALUE: f64 = 0.5;

/// @ai:intent Welch statistic and degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchStatistic {
    pub t: Option<f64>,
    pub df: Option<f64>,
    pub p: f64,
}

/// @ai:intent Calculate average of a slice
/// @ai:effects pure
pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .fold((0.0_f64, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// @ai:intent Sample variance with n-1 denominator; 0 for fewer than two values
/// @ai:effects pure
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let m = mean(values);
    let squares: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    squares / (values.len() - 1) as f64
}

/// @ai:intent Welch's unequal-variance t statistic with Welch-Satterthwaite df
/// @ai:pre a.len() >= 2 && b.len() >= 2
/// @ai:post t and df are None when the standard error is zero
/// @ai:effects pure
pub fn welch_t_test(a: &[f64], b: &[f64]) -> WelchStatistic {
    let na = a.len() as f64;
    let nb = b.len() as f64;

    let va = sample_variance(a) / na;
    let vb = sample_variance(b) / nb;
    let se = (va + vb).sqrt();

    if se <= 0.0 || !se.is_finite() {
        return WelchStatistic {
            t: None,
            df: None,
            p: PLACEHOLDER_P_VALUE,
        };
    }

    let t = (mean(a) - mean(b)) / se;
    let df = (va + vb).powi(2) / (va.powi(2) / (na - 1.0) + vb.powi(2) / (nb - 1.0));

    WelchStatistic {
        t: Some(t),
        df: Some(df),
        p: PLACEHOLDER_P_VALUE,
    }
}
