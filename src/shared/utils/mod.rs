use chrono::DateTime;
use chrono_tz::America::Sao_Paulo;

/// 金額をブラジルレアル表記にフォーマットする
///
/// # 引数
/// * `amount` - 金額
///
/// # 戻り値
/// pt-BR形式の通貨文字列（例: `R$ 1.234,56`）
///
/// # フォーマット規則
/// - 千位区切りはピリオド、小数点はカンマ
/// - 小数点以下は常に2桁
pub fn format_currency_brl(amount: f64) -> String {
    let total_cents = (amount * 100.0).round() as i64;
    let negative = total_cents < 0;
    let total_cents = total_cents.abs();

    let integer_part = total_cents / 100;
    let cents = total_cents % 100;

    // 千位区切りを挿入
    let digits = integer_part.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents:02}")
}

/// RFC3339タイムスタンプをpt-BR表示形式にフォーマットする
///
/// # 引数
/// * `value` - RFC3339形式のタイムスタンプ（省略可能）
///
/// # 戻り値
/// サンパウロ時間の `dd/mm/yyyy HH:MM` 形式、値がない・解析できない場合は `-`
pub fn format_datetime_br(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "-".to_string();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Sao_Paulo)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        Err(e) => {
            log::debug!("タイムスタンプの解析に失敗しました: value={raw}, error={e}");
            "-".to_string()
        }
    }
}
