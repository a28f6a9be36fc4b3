use chrono::{TimeZone, Utc};
use dh_cron::{check, describe, generate, next_runs, parse, validate, CronField, CronOptions};
use dh_domain::Error;
use proptest::prelude::*;

#[test]
fn weekday_morning_scenario() {
    let opts = CronOptions::new("0", "9", "*", "*", "1-5");
    let expr = generate(&opts);
    assert_eq!(expr, "0 9 * * 1-5");

    assert!(check(&expr).is_valid);

    let text = describe(&expr);
    assert!(text.contains("9:00"), "{text}");
    assert!(text.contains("Monday"), "{text}");
    assert!(text.contains("Friday"), "{text}");
}

#[test]
fn bounds_minus_and_plus_one_fail_naming_field() {
    for (i, field) in CronField::ALL.into_iter().enumerate() {
        let (min, max) = field.range();
        let mut cases = vec![max + 1];
        if min > 0 {
            cases.push(min - 1);
        }
        for v in cases {
            let value = v.to_string();
            let mut parts = vec!["*"; 5];
            parts[i] = &value;
            let expr = parts.join(" ");
            match validate(&expr) {
                Err(Error::Range { field: f, message }) => {
                    assert_eq!(f, field.name());
                    assert!(message.contains(&value), "{message}");
                }
                other => panic!("{expr}: expected range error, got {other:?}"),
            }
        }
    }
}

#[test]
fn next_runs_for_generated_expression() {
    let opts = CronOptions::new("*/15", "*", "*", "*", "*");
    let after = Utc.with_ymd_and_hms(2024, 1, 1, 0, 7, 0).unwrap();
    let runs = next_runs(&generate(&opts), &after, 4, chrono_tz::UTC).unwrap();
    let minutes: Vec<u32> = runs.iter().map(|r| chrono::Timelike::minute(r)).collect();
    assert_eq!(minutes, vec![15, 30, 45, 0]);
}

fn field_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (0u32..60).prop_map(|n| n.to_string()),
        (1u32..30).prop_map(|n| format!("*/{n}")),
        (0u32..10, 10u32..20).prop_map(|(a, b)| format!("{a}-{b}")),
        (0u32..10, 1u32..5).prop_map(|(a, s)| format!("{a}-{}/{s}", a + 10)),
    ]
}

proptest! {
    #[test]
    fn parse_inverts_generate(
        minute in field_token(),
        hour in field_token(),
        dom in field_token(),
        month in field_token(),
        dow in field_token(),
    ) {
        let opts = CronOptions::new(minute, hour, dom, month, dow);
        prop_assert_eq!(parse(&generate(&opts)), Some(opts));
    }

    #[test]
    fn in_range_minutes_always_validate(m in 0u32..=59, h in 0u32..=23) {
        let expr = format!("{m} {h} * * *");
        prop_assert!(validate(&expr).is_ok());
    }
}
