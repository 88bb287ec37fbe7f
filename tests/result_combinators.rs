use std::cell::RefCell;

use variant_prelude::prelude::*;
use variant_prelude::{PreludeError, PreludeErrorKind};

const OK_VALUE: i32 = 100;
const ERR_VALUE: &str = "Error occurred";
const OTHER_OK_VALUE: i32 = 200;
const OTHER_ERR_VALUE: &str = "Another error";
const DEFAULT_VALUE: i32 = 0;

fn square(x: i32) -> i32 {
    x * x
}

fn stringify(x: i32) -> String {
    x.to_string()
}

fn len_str(s: &str) -> usize {
    s.len()
}

fn ok_if_positive(x: i32) -> Result<i32, &'static str> {
    if x > 0 {
        Ok(x)
    } else {
        Err("Not positive")
    }
}

fn ok_result() -> Result<i32, &'static str> {
    Ok(OK_VALUE)
}

fn err_result() -> Result<i32, &'static str> {
    Err(ERR_VALUE)
}

#[test]
fn tag_predicates() {
    assert!(ok_result().is_ok());
    assert!(!ok_result().is_err());
    assert!(err_result().is_err());
    assert!(!err_result().is_ok());
}

#[test]
fn predicate_tests_short_circuit() {
    assert!(ok_result().is_ok_and(|v| v > 0));
    assert!(!Result::<i32, &str>::Ok(-5).is_ok_and(|v| v > 0));
    assert!(!err_result().is_ok_and(|v| v > 0));

    let contains_error = |e: &str| e.to_lowercase().contains("error");
    assert!(!ok_result().is_err_and(contains_error));
    assert!(err_result().is_err_and(contains_error));
    assert!(!Result::<i32, &str>::Err("Something else").is_err_and(contains_error));
}

#[test]
fn projection_into_option() {
    assert_eq!(ok_result().ok(), Some(OK_VALUE));
    assert_eq!(err_result().ok(), Nothing);
    assert_eq!(ok_result().err(), Nothing);
    assert_eq!(err_result().err(), Some(ERR_VALUE));
}

#[test]
fn map_touches_only_its_variant() {
    assert_eq!(ok_result().map(square), Ok(10_000));
    assert_eq!(err_result().map(square), Err(ERR_VALUE));
    assert_eq!(ok_result().map_err(len_str), Ok(OK_VALUE));
    assert_eq!(err_result().map_err(len_str), Err(ERR_VALUE.len()));
}

#[test]
fn folds_to_single_value() {
    assert_eq!(ok_result().map_or(String::from("0"), stringify), "100");
    assert_eq!(err_result().map_or(String::from("0"), stringify), "0");
    assert_eq!(ok_result().map_or_else(|e| e.len(), |v| v as usize), 100);
    assert_eq!(err_result().map_or_else(|e| e.len(), |v| v as usize), ERR_VALUE.len());
}

#[test]
fn map_or_default_fails_on_err_branch() {
    assert_eq!(Result::<i32, &str>::Ok(5).map_or_default(square), std::result::Result::Ok(25));
    let err = Result::<i32, &str>::Err("error")
        .map_or_default(square)
        .unwrap_err();
    assert_eq!(err.kind(), PreludeErrorKind::NoDefault);
    assert_eq!(err.operation(), "map_or_default");

    let err = err_result().map_or_default(stringify).unwrap_err();
    assert!(matches!(err, PreludeError::NoDefault { .. }));
}

#[test]
fn inspect_runs_callback_for_matching_variant() {
    let seen_ok = RefCell::new(Vec::new());
    let seen_err = RefCell::new(Vec::new());

    let ok = ok_result()
        .inspect(|v| seen_ok.borrow_mut().push(*v))
        .inspect_err(|e| seen_err.borrow_mut().push(*e));
    assert_eq!(ok, ok_result());

    let err = err_result()
        .inspect(|v| seen_ok.borrow_mut().push(*v))
        .inspect_err(|e| seen_err.borrow_mut().push(*e));
    assert_eq!(err, err_result());

    assert_eq!(seen_ok.into_inner(), vec![OK_VALUE]);
    assert_eq!(seen_err.into_inner(), vec![ERR_VALUE]);
}

#[test]
#[should_panic(expected = "boom from callback")]
fn inspect_propagates_callback_panic() {
    let _ = ok_result().inspect(|_| panic!("boom from callback"));
}

#[test]
fn unwrap_family_on_matching_variant() {
    assert_eq!(ok_result().expect("Should be Ok"), OK_VALUE);
    assert_eq!(ok_result().unwrap(), OK_VALUE);
    assert_eq!(err_result().expect_err("Should be Err"), ERR_VALUE);
    assert_eq!(err_result().unwrap_err(), ERR_VALUE);
}

#[test]
#[should_panic(expected = "Called unwrap on an Err value: \"Error occurred\"")]
fn unwrap_on_err_embeds_error_repr() {
    let _ = err_result().unwrap();
}

#[test]
#[should_panic(expected = "Custom error: \"Error occurred\"")]
fn expect_on_err_prefixes_custom_message() {
    let _ = err_result().expect("Custom error");
}

#[test]
#[should_panic(expected = "Custom error: 100")]
fn expect_err_on_ok_embeds_ok_repr() {
    let _ = ok_result().expect_err("Custom error");
}

#[test]
#[should_panic(expected = "Called unwrap_err on an Ok value: 100")]
fn unwrap_err_on_ok_embeds_ok_repr() {
    let _ = ok_result().unwrap_err();
}

#[test]
fn fallbacks_for_success_value() {
    assert_eq!(ok_result().unwrap_or(DEFAULT_VALUE), OK_VALUE);
    assert_eq!(err_result().unwrap_or(DEFAULT_VALUE), DEFAULT_VALUE);
    assert_eq!(ok_result().unwrap_or_else(|e| e.len() as i32), OK_VALUE);
    assert_eq!(err_result().unwrap_or_else(|e| e.len() as i32), ERR_VALUE.len() as i32);
}

#[test]
fn unwrap_or_default_never_synthesizes_from_err() {
    assert_eq!(ok_result().unwrap_or_default(), std::result::Result::Ok(OK_VALUE));
    assert_eq!(
        Result::<String, i32>::Ok("hello".into()).unwrap_or_default(),
        std::result::Result::Ok("hello".to_string())
    );
    let err = err_result().unwrap_or_default().unwrap_err();
    assert_eq!(err.kind(), PreludeErrorKind::NoDefault);
    let err = Result::<String, i32>::Err(5).unwrap_or_default().unwrap_err();
    assert!(err.to_string().contains("alloc::string::String"), "{err}");
}

#[test]
fn and_then_binds_on_success() {
    assert_eq!(Result::<i32, &str>::Ok(5).and_then(ok_if_positive), Ok(5));
    assert_eq!(Result::<i32, &str>::Ok(-5).and_then(ok_if_positive), Err("Not positive"));
    assert_eq!(err_result().and_then(ok_if_positive), Err(ERR_VALUE));
}

#[test]
fn or_else_binds_on_error_and_may_change_error_type() {
    assert_eq!(ok_result().or_else(|_| Result::<i32, &str>::Ok(DEFAULT_VALUE)), Ok(OK_VALUE));
    assert_eq!(ok_result().or_else(|_| Result::<i32, &str>::Err(OTHER_ERR_VALUE)), Ok(OK_VALUE));
    assert_eq!(err_result().or_else(|_| Result::<i32, &str>::Ok(DEFAULT_VALUE)), Ok(DEFAULT_VALUE));
    assert_eq!(err_result().or_else(|_| Result::<i32, &str>::Err(OTHER_ERR_VALUE)), Err(OTHER_ERR_VALUE));
    assert_eq!(err_result().or_else(|e| Result::<i32, usize>::Err(e.len())), Err(ERR_VALUE.len()));

    assert_eq!(Result::<i32, &str>::Err("abc").or_else(|_| Result::<i32, &str>::Ok(0)), Ok(0));
    assert_eq!(Result::<i32, &str>::Ok(100).or_else(|_| Result::<i32, &str>::Err("x")), Ok(100));
}

#[test]
fn eager_combinators() {
    let ok2: Result<&str, &str> = Ok("World");
    let err2: Result<&str, &str> = Err(OTHER_ERR_VALUE);
    assert_eq!(ok_result().and_(ok2), Ok("World"));
    assert_eq!(ok_result().and_(err2), Err(OTHER_ERR_VALUE));
    assert_eq!(err_result().and_(ok2), Err(ERR_VALUE));
    assert_eq!(err_result().and_(err2), Err(ERR_VALUE));

    let other_ok: Result<i32, &str> = Ok(OTHER_OK_VALUE);
    let diff_err: Result<i32, i32> = Err(999);
    assert_eq!(ok_result().or_(other_ok), Ok(OK_VALUE));
    assert_eq!(ok_result().or_(diff_err), Ok(OK_VALUE));
    assert_eq!(err_result().or_(other_ok), Ok(OTHER_OK_VALUE));
    assert_eq!(err_result().or_(diff_err), Err(999));
}

#[test]
fn iter_yields_success_payload() {
    assert_eq!(ok_result().iter().copied().collect::<Vec<_>>(), vec![OK_VALUE]);
    assert_eq!(err_result().iter().count(), 0);
}

#[test]
fn iter_mut_mutates_held_value() {
    let mut ok: Result<Vec<i32>, &str> = Ok(vec![1, 2]);
    let mut iter = ok.iter_mut();
    let held = iter.next().expect("Ok yields one value");
    held.push(3);
    assert!(iter.next().is_none());
    assert_eq!(ok.unwrap(), vec![1, 2, 3]);

    let mut err: Result<Vec<i32>, &str> = Err(ERR_VALUE);
    assert!(err.iter_mut().next().is_none());
}

#[test]
fn flatten_removes_nesting() {
    let ok_ok: Result<Result<i32, &str>, &str> = Ok(Ok(OK_VALUE));
    let ok_err: Result<Result<i32, &str>, &str> = Ok(Err(ERR_VALUE));
    let err_outer: Result<Result<i32, &str>, &str> = Err(OTHER_ERR_VALUE);
    assert_eq!(ok_ok.flatten(), Ok(OK_VALUE));
    assert_eq!(ok_err.flatten(), Err(ERR_VALUE));
    assert_eq!(err_outer.flatten(), Err(OTHER_ERR_VALUE));
}

#[test]
fn try_flatten_rejects_non_result_payload() {
    let nested: Result<Result<i32, &'static str>, &'static str> = Ok(Ok(1));
    assert_eq!(nested.try_flatten::<i32>(), std::result::Result::Ok(Ok(1)));

    let flat: Result<i32, &'static str> = Ok(123);
    let err = flat.try_flatten::<i32>().unwrap_err();
    assert_eq!(err.kind(), PreludeErrorKind::TypeMismatch);
    assert_eq!(err.operation(), "try_flatten");

    let outer_err: Result<i32, &'static str> = Err("e");
    assert_eq!(outer_err.try_flatten::<i32>(), std::result::Result::Ok(Err("e")));
}

#[test]
fn transpose_swaps_families() {
    let ok_some: Result<Option<i32>, &str> = Ok(Some(OK_VALUE));
    let ok_nothing: Result<Option<i32>, &str> = Ok(Nothing);
    let err: Result<Option<i32>, &str> = Err("e");
    assert_eq!(ok_some.transpose(), Some(Ok(OK_VALUE)));
    assert_eq!(ok_nothing.transpose(), Nothing);
    assert_eq!(err.transpose(), Some(Err("e")));
}

#[test]
fn try_transpose_rejects_non_option_payload() {
    let ok_some: Result<Option<i32>, &'static str> = Ok(Some(1));
    assert_eq!(ok_some.try_transpose::<i32>(), std::result::Result::Ok(Some(Ok(1))));

    let flat: Result<i32, &'static str> = Ok(123);
    let err = flat.try_transpose::<i32>().unwrap_err();
    assert_eq!(err.kind(), PreludeErrorKind::TypeMismatch);
    assert_eq!(err.code(), "core.prelude.type_mismatch");
}

#[test]
fn into_ok_and_into_err_extract_payload() {
    let ok = ok_result();
    assert_eq!(ok.into_ok(), OK_VALUE);
    // Copy ペイロードなら取り出し後も元の値を使える。
    assert!(ok.is_ok());

    let err = err_result();
    assert_eq!(err.into_err(), ERR_VALUE);
    assert!(err.is_err());
}

#[test]
#[should_panic(expected = "Called into_ok on an Err value: \"Error occurred\"")]
fn into_ok_on_err_panics() {
    let _ = err_result().into_ok();
}

#[test]
#[should_panic(expected = "Called into_err on an Ok value: 100")]
fn into_err_on_ok_panics() {
    let _ = ok_result().into_err();
}

#[test]
fn cloned_duplicates_whichever_payload() {
    let original = vec![1, 2];
    let ok: Result<Vec<i32>, &str> = Ok(original.clone());
    let mut cloned = ok.as_ref().cloned();
    assert_eq!(cloned, ok);
    cloned.as_mut().map(|list| list.push(3)).unwrap();
    assert_eq!(ok, Ok(original.clone()));

    let err: Result<i32, Vec<i32>> = Err(original.clone());
    let mut cloned = err.as_ref().cloned();
    assert_eq!(cloned, err);
    cloned.as_mut().map_err(|list| list.push(3)).unwrap_err();
    assert_eq!(err, Err(original));
}

#[test]
fn copied_duplicates_copy_payloads() {
    let ok: Result<i32, char> = Ok(7);
    let err: Result<i32, char> = Err('x');
    assert_eq!(ok.as_ref().copied(), Ok(7));
    assert_eq!(err.as_ref().copied(), Err('x'));
}

#[test]
fn contains_checks_respective_payload() {
    assert!(ok_result().contains(&OK_VALUE));
    assert!(!ok_result().contains(&OTHER_OK_VALUE));
    assert!(!err_result().contains(&OK_VALUE));

    assert!(!ok_result().contains_err(&ERR_VALUE));
    assert!(err_result().contains_err(&ERR_VALUE));
    assert!(!err_result().contains_err(&OTHER_ERR_VALUE));
}

#[test]
fn equality_is_structural() {
    assert_eq!(Result::<i32, &str>::Ok(10), Ok(10));
    assert_ne!(Result::<i32, &str>::Ok(10), Ok(20));
    assert_eq!(Result::<i32, &str>::Err("abc"), Err("abc"));
    assert_ne!(Result::<i32, &str>::Err("abc"), Err("def"));
    assert_ne!(Result::<i32, i32>::Ok(10), Err(10));
    assert_eq!(Result::<Vec<i32>, ()>::Ok(vec![1]), Ok(vec![1]));
    assert_ne!(Result::<(), Vec<i32>>::Err(vec![1]), Err(vec![2]));
}

#[test]
fn representation_uses_payload_debug() {
    assert_eq!(format!("{:?}", Result::<i32, ()>::Ok(10)), "Ok(10)");
    assert_eq!(format!("{:?}", Result::<(), &str>::Err("error")), "Err(\"error\")");
    assert_eq!(format!("{:?}", Result::<(), std::option::Option<i32>>::Err(None)), "Err(None)");
    assert_eq!(format!("{:?}", Result::<Vec<i32>, ()>::Ok(vec![1, 2])), "Ok([1, 2])");
}

#[test]
fn free_predicates_narrow_in_branches() {
    let ok = ok_result();
    let err = err_result();
    if is_ok(&ok) {
        assert_eq!(ok.unwrap(), OK_VALUE);
    } else {
        panic!("is_ok failed for Ok value");
    }
    assert!(!is_err(&ok));
    assert!(!is_ok(&err));
    if is_err(&err) {
        assert_eq!(err.unwrap_err(), ERR_VALUE);
    } else {
        panic!("is_err failed for Err value");
    }
}

#[test]
fn as_mut_allows_in_place_edit() {
    let mut res: Result<i32, &str> = Ok(1);
    if let Ok(value) = res.as_mut() {
        *value += 41;
    }
    assert_eq!(res, Ok(42));
}
