//! Descriptive statistics over optional column values.
//!
//! Missing values (`None`) are skipped everywhere. Correlation uses
//! pairwise-complete observations: a row contributes only when both columns
//! are present.

use serde::Serialize;

/// Arithmetic mean of the present values.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Position and value of the largest present value. Ties go to the first one.
pub fn arg_max<I>(values: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    first_extreme(values, |candidate, best| candidate > best)
}

/// Position and value of the smallest present value. Ties go to the first one.
pub fn arg_min<I>(values: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    first_extreme(values, |candidate, best| candidate < best)
}

fn first_extreme<I, F>(values: I, better: F) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
    F: Fn(f64, f64) -> bool,
{
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i, v)))
        .fold(None, |best, (i, v)| match best {
            Some((_, b)) if !better(v, b) => best,
            _ => Some((i, v)),
        })
}

/// Pearson correlation coefficient over pairwise-complete observations.
///
/// Returns `None` with fewer than two complete pairs or when either column
/// has zero variance.
pub fn pearson<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
{
    let complete: Vec<(f64, f64)> = pairs
        .into_iter()
        .filter_map(|(x, y)| Some((x?, y?)))
        .collect();

    if complete.len() < 2 {
        return None;
    }

    let n = complete.len() as f64;
    let mean_x = complete.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = complete.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &complete {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Summary of one column, in the shape of a `describe()` table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; absent with a single observation.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarise the present values, or `None` if there are none.
pub fn describe<I>(values: I) -> Option<Summary>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sorted: Vec<f64> = values.into_iter().flatten().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    });

    Some(Summary {
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Linear-interpolation quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
