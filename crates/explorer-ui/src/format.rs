//! Display helpers for transaction lists and detail pages

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;
use std::hash::Hash;

use explorer_api::{Transaction, TransactionStatus, TransactionType};
use explorer_navigation::contract_name;

pub const DEFAULT_SEPARATOR: &str = "∙";

const MICRO_PER_STX: f64 = 1_000_000.0;

/// Keep `offset` characters on each end: `start…end`.
pub fn truncate_middle(input: &str, offset: usize) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let chars: Vec<char> = input.chars().collect();
    let start: String = chars.iter().take(offset).collect();
    let end: String = chars[chars.len().saturating_sub(offset)..].iter().collect();

    Some(format!("{start}…{end}"))
}

/// Micro-STX to STX. Empty or unparsable amounts are zero.
pub fn micro_to_stacks(amount: &str) -> f64 {
    amount
        .trim()
        .parse::<f64>()
        .map(|micro| micro / MICRO_PER_STX)
        .unwrap_or(0.0)
}

pub fn to_kebab_case(input: &str) -> String {
    input.replace([' ', '_'], "-").to_lowercase()
}

/// Left-pad `n` to `width` with `fill`, keeping the sign in front.
pub fn start_pad(n: i64, width: usize, fill: char) -> String {
    let plain = n.to_string();
    if plain.len() > width {
        return plain;
    }

    let padded = format!("{}{}", fill.to_string().repeat(width), n.unsigned_abs());
    let digits: String = padded.chars().skip(padded.chars().count() - width).collect();

    if n < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Join the non-empty strings with ` {sep} `.
pub fn add_sep_between_strings<I, S>(strings: I, sep: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(&format!(" {sep} "))
}

/// Decode a hex memo to text
pub fn memo_string(memo_hex: &str) -> Option<String> {
    if memo_hex.is_empty() {
        return None;
    }

    let raw = memo_hex.strip_prefix("0x").unwrap_or(memo_hex);
    match hex::decode(raw) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::debug!(error = %e, "Memo is not valid hex");
            None
        }
    }
}

/// First item per key, in input order
pub fn dedupe_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

#[derive(Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn millis(self) -> f64 {
        const DAY: f64 = 86_400_000.0;
        match self {
            Unit::Second => 1_000.0,
            Unit::Minute => 60_000.0,
            Unit::Hour => 3_600_000.0,
            Unit::Day => DAY,
            Unit::Month => DAY * 30.436875,
            Unit::Year => DAY * 365.2425,
        }
    }
}

struct Threshold {
    label: &'static str,
    max: Option<i64>,
    unit: Option<Unit>,
}

// A row without a unit reuses the value measured by the row above it.
const THRESHOLDS: &[Threshold] = &[
    Threshold { label: "s", max: Some(44), unit: Some(Unit::Second) },
    Threshold { label: "m", max: Some(89), unit: None },
    Threshold { label: "mm", max: Some(44), unit: Some(Unit::Minute) },
    Threshold { label: "h", max: Some(89), unit: None },
    Threshold { label: "hh", max: Some(21), unit: Some(Unit::Hour) },
    Threshold { label: "d", max: Some(35), unit: None },
    Threshold { label: "dd", max: Some(25), unit: Some(Unit::Day) },
    Threshold { label: "M", max: Some(45), unit: None },
    Threshold { label: "MM", max: Some(10), unit: Some(Unit::Month) },
    Threshold { label: "y", max: Some(17), unit: None },
    Threshold { label: "yy", max: None, unit: Some(Unit::Year) },
];

fn phrase(label: &str, n: i64) -> String {
    match label {
        "s" => "a few seconds".to_string(),
        "m" => "a minute".to_string(),
        "mm" => format!("{n} minutes"),
        "h" => "an hour".to_string(),
        "hh" => format!("{n} hours"),
        "d" => "a day".to_string(),
        "dd" => format!("{n} days"),
        "M" => "a month".to_string(),
        "MM" => format!("{n} months"),
        "y" => "a year".to_string(),
        _ => format!("{n} years"),
    }
}

fn bucket(diff_ms: f64) -> (&'static str, i64) {
    let mut value = 0.0;

    for (i, threshold) in THRESHOLDS.iter().enumerate() {
        if let Some(unit) = threshold.unit {
            value = diff_ms / unit.millis();
        }
        let n = value.abs().round() as i64;

        if threshold.max.map_or(true, |max| n <= max) {
            // "1 minutes" reads as "a minute"
            let label = if n <= 1 && i > 0 {
                THRESHOLDS[i - 1].label
            } else {
                threshold.label
            };
            return (label, n);
        }
    }

    ("yy", (diff_ms / Unit::Year.millis()).abs().round() as i64)
}

/// Human distance from `now` to `ts`, e.g. "3 hours ago" or "in a minute".
pub fn to_relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (ts - now).num_milliseconds() as f64;
    let (label, n) = bucket(diff_ms);
    let text = phrase(label, n);

    if diff_ms > 0.0 {
        format!("in {text}")
    } else {
        format!("{text} ago")
    }
}

pub fn is_pending(tx: &Transaction) -> bool {
    tx.tx_status == TransactionStatus::Pending
}

/// List item title
pub fn transaction_title(tx: &Transaction) -> String {
    let truncated_id = || truncate_middle(&tx.tx_id, 10).unwrap_or_default();

    match tx.tx_type {
        TransactionType::SmartContract | TransactionType::ContractCall => tx
            .contract_id()
            .and_then(contract_name)
            .map(str::to_string)
            .unwrap_or_else(truncated_id),
        TransactionType::TokenTransfer => "Token transfer".to_string(),
        _ => truncated_id(),
    }
}

/// List item caption: when it was anchored plus a type-specific detail
pub fn transaction_caption(tx: &Transaction, now: DateTime<Utc>) -> String {
    let date = tx
        .burn_block_time
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .map(|ts| to_relative_time(ts, now))
        .unwrap_or_else(|| "Pending...".to_string());

    match tx.tx_type {
        TransactionType::SmartContract | TransactionType::ContractCall => {
            let truncated_id = truncate_middle(&tx.tx_id, 4).unwrap_or_default();
            add_sep_between_strings([date, truncated_id], DEFAULT_SEPARATOR)
        }
        TransactionType::TokenTransfer => {
            let amount = tx
                .token_transfer
                .as_ref()
                .map(|t| micro_to_stacks(&t.amount))
                .unwrap_or_default();
            add_sep_between_strings([date, format!("{amount} STX")], DEFAULT_SEPARATOR)
        }
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use explorer_api::{ContractCall, TokenTransfer};

    const TX_ID: &str = "0x5e9f3933e358df6a73fec0d47ce3e1062c20812c129f5294e6f37a8d27c051d9";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 7, 8, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("abcdefghijkl", 3).as_deref(), Some("abc…jkl"));
        assert_eq!(truncate_middle(TX_ID, 4).as_deref(), Some("0x5e…51d9"));
        assert_eq!(truncate_middle("ab", 5).as_deref(), Some("ab…ab"));
        assert_eq!(truncate_middle("", 5), None);
    }

    #[test]
    fn test_micro_to_stacks() {
        assert_eq!(micro_to_stacks("1500000"), 1.5);
        assert_eq!(micro_to_stacks("1000000").to_string(), "1");
        assert_eq!(micro_to_stacks(""), 0.0);
        assert_eq!(micro_to_stacks("lots"), 0.0);
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Token Transfer"), "token-transfer");
        assert_eq!(to_kebab_case("contract_call and_more"), "contract-call-and-more");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_start_pad() {
        assert_eq!(start_pad(5, 2, '0'), "05");
        assert_eq!(start_pad(42, 2, '0'), "42");
        assert_eq!(start_pad(123, 2, '0'), "123");
        assert_eq!(start_pad(-5, 2, '0'), "-05");
        assert_eq!(start_pad(7, 4, ' '), "   7");
    }

    #[test]
    fn test_add_sep_between_strings() {
        assert_eq!(add_sep_between_strings(["a", "b", "c"], DEFAULT_SEPARATOR), "a ∙ b ∙ c");
        assert_eq!(add_sep_between_strings(["a", "", "c"], "|"), "a | c");
        assert_eq!(add_sep_between_strings(["", ""], "|"), "");
    }

    #[test]
    fn test_memo_string() {
        assert_eq!(memo_string("0x68656c6c6f").as_deref(), Some("hello"));
        assert_eq!(memo_string("68656c6c6f").as_deref(), Some("hello"));
        assert_eq!(memo_string(""), None);
        assert_eq!(memo_string("0xzz"), None);
    }

    #[test]
    fn test_dedupe_by() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let deduped = dedupe_by(items, |(key, _)| *key);
        assert_eq!(deduped, vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn test_relative_time_past() {
        let cases = [
            (Duration::seconds(0), "a few seconds ago"),
            (Duration::seconds(10), "a few seconds ago"),
            (Duration::seconds(60), "a minute ago"),
            (Duration::seconds(90), "2 minutes ago"),
            (Duration::minutes(5), "5 minutes ago"),
            (Duration::minutes(45), "an hour ago"),
            (Duration::hours(3), "3 hours ago"),
            (Duration::hours(24), "a day ago"),
            (Duration::days(3), "3 days ago"),
            (Duration::days(40), "a month ago"),
            (Duration::days(90), "3 months ago"),
            (Duration::days(400), "a year ago"),
            (Duration::days(800), "2 years ago"),
        ];

        for (ago, expected) in cases {
            assert_eq!(to_relative_time(now() - ago, now()), expected, "{ago:?}");
        }
    }

    #[test]
    fn test_relative_time_future() {
        assert_eq!(to_relative_time(now() + Duration::minutes(5), now()), "in 5 minutes");
        assert_eq!(to_relative_time(now() + Duration::hours(1), now()), "in an hour");
    }

    #[test]
    fn test_titles() {
        let mut call = Transaction::new(TX_ID, TransactionType::ContractCall);
        call.contract_call = Some(ContractCall {
            contract_id: "ST2ZRX0K27GW0SP3GJCEMHD95TQGJMKB7G9Y0X1MH.hello-world".to_string(),
            function_name: "say-hi".to_string(),
        });
        assert_eq!(transaction_title(&call), "hello-world");

        let transfer = Transaction::new(TX_ID, TransactionType::TokenTransfer);
        assert_eq!(transaction_title(&transfer), "Token transfer");

        let coinbase = Transaction::new(TX_ID, TransactionType::Coinbase);
        assert_eq!(transaction_title(&coinbase), "0x5e9f3933…8d27c051d9");
    }

    #[test]
    fn test_captions() {
        let mut transfer = Transaction::new(TX_ID, TransactionType::TokenTransfer);
        transfer.token_transfer = Some(TokenTransfer {
            recipient_address: "ST2ZRX0K27GW0SP3GJCEMHD95TQGJMKB7G9Y0X1MH".to_string(),
            amount: "2500000".to_string(),
            memo: String::new(),
        });
        assert_eq!(transaction_caption(&transfer, now()), "Pending... ∙ 2.5 STX");

        let mut deploy = Transaction::new(TX_ID, TransactionType::SmartContract);
        deploy.burn_block_time = Some((now() - Duration::hours(3)).timestamp());
        assert_eq!(transaction_caption(&deploy, now()), "3 hours ago ∙ 0x5e…51d9");

        let coinbase = Transaction::new(TX_ID, TransactionType::Coinbase);
        assert_eq!(transaction_caption(&coinbase, now()), "Pending...");
    }

    #[test]
    fn test_is_pending() {
        let mut tx = Transaction::new(TX_ID, TransactionType::TokenTransfer);
        assert!(!is_pending(&tx));
        tx.tx_status = TransactionStatus::Pending;
        assert!(is_pending(&tx));
    }
}
