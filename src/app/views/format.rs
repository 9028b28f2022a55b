//! 文本格式化：HTML 转义和价格显示

/// 转义 HTML 文本和属性值中的特殊字符
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 保留两位小数，中间值远离零舍入
///
/// 二进制浮点数能精确表示的中间值只有 `m / 8`（m 为奇数）这一类，
/// 标准库格式化会对它们做银行家舍入，所以这里在整数上处理：
/// `m / 8` 的分值为 `m * 25 / 2`，向上取整即 `(m * 25 + 1) / 2`。
/// 绝对值不小于 1e21 时输出指数形式，例如 `1e+21`。
pub fn fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value == 0.0 {
        return "0.00".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1e21 {
        let exponent = format!("{:e}", magnitude).replacen('e', "e+", 1);
        return format!("{sign}{exponent}");
    }

    // 2^50 以上的 f64 间隔至少为 0.25，不再有中间值
    let eighths = magnitude * 8.0;
    let is_tie = eighths < 2f64.powi(53) && eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{:.2}", value);
    }

    let cents = (eighths as u64 * 25 + 1) / 2;
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// 商品卡片上的价格文本，例如 `$19.50 USD`
pub fn price_label(price: f64) -> String {
    format!("${} USD", fixed2(price))
}
