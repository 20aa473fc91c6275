//! Tests for argument capture on sync and async failures.

use std::{error::Error, sync::Arc};

use {
    anyhow::{Result as AnyhowResult, anyhow, bail},
    parking_lot::Mutex,
    serde_json::{Value, json},
};

use crate::{
    capture::catch_args,
    die,
    error::{DieError, Thrown},
    raise::Reason,
};

fn failing(_: (i32, i32, i32)) -> Result<i32, Thrown> {
    die("boom")
}

#[test]
fn test_success_passes_through() {
    let add = catch_args(|(a, b): (i32, i32)| Ok::<_, Thrown>(a + b));
    assert_eq!(add.call((2, 3)).unwrap(), 5);
}

#[test]
fn test_sync_failure_records_args() {
    let wrapped = catch_args(failing);
    let thrown = wrapped.call((1, 2, 3)).unwrap_err();

    let error = thrown.as_error().unwrap();
    assert_eq!(error.message(), "boom");
    assert_eq!(error.cause(), Some(&json!({ "args": [1, 2, 3] })));
}

#[test]
fn test_string_cause_is_kept() {
    let wrapped = catch_args(|(_id,): (&str,)| -> Result<(), DieError> {
        Err(DieError::new("lookup failed").with_cause("ctx"))
    });
    let error = wrapped.call(("user-1",)).unwrap_err();
    assert_eq!(
        error.cause(),
        Some(&json!({ "cause": "ctx", "args": ["user-1"] }))
    );
}

#[test]
fn test_non_error_failure_is_untouched() {
    let wrapped = catch_args(|(_,): (u8,)| -> Result<(), Thrown> { die(json!(404)) });
    let thrown = wrapped.call((9,)).unwrap_err();
    assert!(matches!(thrown, Thrown::Value(value) if value == json!(404)));
}

#[test]
fn test_side_effect_cause_is_merged() {
    let wrapped = catch_args(|(_,): (&str,)| -> Result<(), Thrown> {
        die(Reason::side_effect(|_| Ok(()), vec![json!("notice")]))
    });
    let thrown = wrapped.call(("input",)).unwrap_err();

    assert_eq!(thrown.message(), "DIE");
    assert_eq!(
        thrown.as_error().unwrap().cause(),
        Some(&json!({ "args": ["input"] }))
    );
}

#[test]
fn test_wrapping_twice_keeps_outer_args() {
    let inner = catch_args(failing);
    let outer = catch_args(inner.into_fn());
    let thrown = outer.call((4, 5, 6)).unwrap_err();
    assert_eq!(
        thrown.as_error().unwrap().cause(),
        Some(&json!({ "args": [4, 5, 6] }))
    );
}

#[test]
fn test_nested_wrappers_with_different_args() {
    let inner = catch_args(failing);
    let outer = catch_args(move |(label,): (&str,)| inner.call((label.len() as i32, 0, 0)));
    let thrown = outer.call(("abc",)).unwrap_err();
    assert_eq!(
        thrown.as_error().unwrap().cause(),
        Some(&json!({ "args": ["abc"] }))
    );
}

#[test]
fn test_anyhow_failures() {
    let wrapped = catch_args(|(_path,): (&str,)| -> AnyhowResult<()> {
        Err(DieError::new("unreadable").into())
    });
    let error = wrapped.call(("/etc/app.json",)).unwrap_err();
    let inner = error.downcast_ref::<DieError>().unwrap();
    assert_eq!(inner.cause(), Some(&json!({ "args": ["/etc/app.json"] })));

    let wrapped = catch_args(|(_,): (i32,)| -> AnyhowResult<()> { bail!("plain failure") });
    let error = wrapped.call((1,)).unwrap_err();
    assert_eq!(error.to_string(), "plain failure");
    let inner = error.downcast_ref::<DieError>().unwrap();
    assert_eq!(inner.cause(), Some(&json!({ "args": [1] })));
}

#[test]
fn test_foreign_parse_error_records_args() {
    let parse = catch_args(|(text,): (String,)| -> AnyhowResult<Value> {
        Ok(serde_json::from_str(&text)?)
    });
    assert_eq!(parse.call(("[1]".to_string(),)).unwrap(), json!([1]));

    let error = parse.call(("not_parsable".to_string(),)).unwrap_err();
    let inner = error.downcast_ref::<DieError>().unwrap();
    assert!(inner.message().contains("expected"));
    assert_eq!(inner.cause(), Some(&json!({ "args": ["not_parsable"] })));
    assert!(inner.source().is_some());
}

#[test]
fn test_arguments_captured_before_call() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let wrapped = catch_args(move |(mut items,): (Vec<i32>,)| -> Result<(), Thrown> {
        items.push(99);
        sink.lock().extend(items);
        die("rejected")
    });

    let thrown = wrapped.call((vec![1, 2],)).unwrap_err();
    assert_eq!(*seen.lock(), vec![1, 2, 99]);
    assert_eq!(
        thrown.as_error().unwrap().cause(),
        Some(&json!({ "args": [[1, 2]] }))
    );
}

#[tokio::test]
async fn test_async_success_passes_through() {
    let wrapped = catch_args(|(value,): (u32,)| async move { Ok::<_, Thrown>(value * 2) });
    assert_eq!(wrapped.call_async((21,)).await.unwrap(), 42);
}

#[tokio::test]
async fn test_async_failure_keeps_string_cause() {
    let wrapped = catch_args(|(_, _): (&str, u32)| async {
        Err::<(), _>(Thrown::from(DieError::new("timeout").with_cause("ctx")))
    });
    let thrown = wrapped.call_async(("fetch", 3)).await.unwrap_err();

    assert_eq!(thrown.message(), "timeout");
    assert_eq!(
        thrown.as_error().unwrap().cause(),
        Some(&json!({ "cause": "ctx", "args": ["fetch", 3] }))
    );
}

#[tokio::test]
async fn test_async_dropped_before_settling_skips_enrichment() {
    let polled = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&polled);
    let wrapped = catch_args(move |(): ()| {
        let flag = Arc::clone(&flag);
        async move {
            *flag.lock() = true;
            Err::<(), _>(DieError::new("never observed"))
        }
    });

    drop(wrapped.call_async(()));
    assert!(!*polled.lock());
}

#[tokio::test]
async fn test_try_call_async_immediate_failure() {
    let wrapped = catch_args(|(id,): (u64,)| {
        if id == 0 {
            return Err(anyhow!("invalid id").context("precondition"));
        }
        Ok(async move { Ok::<_, anyhow::Error>(id) })
    });

    let error = match wrapped.try_call_async((0,)) {
        Ok(_) => panic!("expected an immediate failure"),
        Err(error) => error,
    };
    assert_eq!(error.to_string(), "precondition");

    let pending = wrapped.try_call_async((7,)).unwrap();
    assert_eq!(pending.await.unwrap(), 7);
}

#[tokio::test]
async fn test_try_call_async_immediate_error_object() {
    let wrapped = catch_args(|(id,): (u64,)| {
        if id == 0 {
            return Err(Thrown::from(DieError::new("invalid id")));
        }
        Ok(async move { die::<u64>("unreachable store") })
    });

    let thrown = match wrapped.try_call_async((0,)) {
        Ok(_) => panic!("expected an immediate failure"),
        Err(thrown) => thrown,
    };
    assert_eq!(
        thrown.as_error().unwrap().cause(),
        Some(&json!({ "args": [0] }))
    );

    let thrown = wrapped.try_call_async((5,)).unwrap().await.unwrap_err();
    assert_eq!(thrown.message(), "unreachable store");
    assert_eq!(
        thrown.as_error().unwrap().cause(),
        Some(&json!({ "args": [5] }))
    );
}
