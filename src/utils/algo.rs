/// 平均値を計算する
pub fn get_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / (values.len() as f64)
}

/// 最大値を計算する
pub fn get_maximum(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// 標準偏差を計算する (population, Nで割る)
pub fn get_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let average = get_average(values);
    let variance = values
        .iter()
        .map(|v| (v - average) * (v - average))
        .sum::<f64>()
        / (values.len() as f64);

    variance.sqrt()
}
