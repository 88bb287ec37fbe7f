//! `Result` 型と、その組み合わせ子一式。
//!
//! 成功 `Ok(T)` / 失敗 `Err(E)` の閉じた 2 バリアント。`Option` へは
//! `ok()` / `err()` / `transpose()` で射影する。

use crate::{
    error::{raise, PreludeError},
    iter::{try_collect, IntoIter, Iter, IterMut},
    never::Never,
    option::Option,
    try_support::{ControlFlow, Try},
};
use std::{
    any::{self, Any},
    fmt::Debug,
};

type StdResult<T, E> = std::result::Result<T, E>;

/// 成功と失敗を表す Result 互換型。
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "Result の戻り値を無視すると失敗を見逃します"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// 正常系。
    Ok(T),
    /// 異常系。
    Err(E),
}

/// `Ok` であるかどうかを返す。分岐の条件式でメソッド呼び出しの代わりに使う。
#[inline]
pub const fn is_ok<T, E>(result: &Result<T, E>) -> bool {
    result.is_ok()
}

/// `Err` であるかどうかを返す。
#[inline]
pub const fn is_err<T, E>(result: &Result<T, E>) -> bool {
    result.is_err()
}

impl<T, E> Result<T, E> {
    /// `Ok` であるかどうかを返す。
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// `Err` であるかどうかを返す。
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// `Ok` かつ述語を満たすときに `true`。`Err` では述語を呼ばない。
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// `Err` かつ述語を満たすときに `true`。`Ok` では述語を呼ばない。
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(err) => predicate(err),
        }
    }

    /// `Result` から `Option` へ変換する（エラー情報を破棄）。
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::Nothing,
        }
    }

    /// エラー値だけを `Option` として取り出す。
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::Nothing,
            Self::Err(err) => Option::Some(err),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// 正常値に写像を適用する。
    #[inline]
    #[must_use = "map の結果を利用しないと変換が失われます"]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// エラー値に写像を適用する。
    #[inline]
    #[must_use = "map_err の結果を利用しないと変換が失われます"]
    pub fn map_err<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(f(err)),
        }
    }

    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// `Err` には `default`、`Ok` には `f` を適用して 1 つの値へ畳み込む。
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => default(err),
        }
    }

    /// `Ok` に `f` を適用する。
    ///
    /// `Err` の場合はエラー処理関数なしで既定値を合成しないため、
    /// `U` がゼロ値を持つかどうかに関わらず [`PreludeError::NoDefault`] を返す。
    pub fn map_or_default<U, F>(self, f: F) -> StdResult<U, PreludeError>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => StdResult::Ok(f(value)),
            Self::Err(_) => StdResult::Err(PreludeError::no_default(
                "map_or_default",
                any::type_name::<U>(),
            )),
        }
    }

    /// `Ok` ならコールバックへ成功値の参照を渡し、自身をそのまま返す。
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// `Err` ならコールバックへエラー値の参照を渡し、自身をそのまま返す。
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(err) = &self {
            f(err);
        }
        self
    }

    /// 成功値を 0〜1 回返すイテレータ。
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().ok().unwrap_or_none())
    }

    /// 成功値の可変参照を 0〜1 回返すイテレータ。変更は `self` に残る。
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut().ok().unwrap_or_none())
    }

    /// 成功値を取得し、エラー時は `"{message}: {err:?}"` で panic する。
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => raise(PreludeError::expect_failed("expect", message, &err)),
        }
    }

    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => raise(PreludeError::unwrap_on_err("unwrap", &err)),
        }
    }

    /// エラー値を取得し、`Ok` のときは成功値の表現を添えて panic する。
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => raise(PreludeError::expect_failed("expect_err", message, &value)),
            Self::Err(err) => err,
        }
    }

    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => raise(PreludeError::unwrap_on_ok("unwrap_err", &value)),
            Self::Err(err) => err,
        }
    }

    /// エラー時に既定値を返す。
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// エラー時に遅延評価した値を返す。
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => default(err),
        }
    }

    /// 成功値を返す。`Err` からは既定値を合成せず、常に [`PreludeError::NoDefault`] を返す。
    pub fn unwrap_or_default(self) -> StdResult<T, PreludeError>
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(_) => StdResult::Err(PreludeError::no_default(
                "unwrap_or_default",
                any::type_name::<T>(),
            )),
        }
    }

    /// `self` を消費して成功値を取り出す。`Err` の場合は panic する。
    ///
    /// 所有権はコンパイラが移すため、呼び出し後の `self` は `T`/`E` が `Copy` の場合にだけ再利用できる。
    #[inline]
    #[track_caller]
    pub fn into_ok(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => raise(PreludeError::unwrap_on_err("into_ok", &err)),
        }
    }

    /// `self` を消費してエラー値を取り出す。`Ok` の場合は panic する。
    #[inline]
    #[track_caller]
    pub fn into_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => raise(PreludeError::unwrap_on_ok("into_err", &value)),
            Self::Err(err) => err,
        }
    }

    /// `Ok` なら `other` を返す（先行評価）。
    #[inline]
    pub fn and_<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(err) => Result::Err(err),
        }
    }

    /// 正常値を `Result` で連鎖させる。
    #[inline]
    #[must_use = "and_then の結果を利用しないと副作用が起きません"]
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// `Err` なら `other` を返す（先行評価）。エラー型は `other` 側に変わる。
    #[inline]
    pub fn or_<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// エラー時に代替計算を行う。
    #[inline]
    #[must_use = "or_else の結果を利用しないと回復処理が無効になります"]
    pub fn or_else<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => f(err),
        }
    }

    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Ok(held) => held == value,
            Self::Err(_) => false,
        }
    }

    #[inline]
    pub fn contains_err<F>(&self, err: &F) -> bool
    where
        E: PartialEq<F>,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(held) => held == err,
        }
    }

    /// 実行時にしか型が分からない成功値を `Result<U, E>` として平坦化する。
    ///
    /// 成功値が `Result<U, E>` でなければ [`PreludeError::TypeMismatch`] を返す。
    pub fn try_flatten<U>(self) -> StdResult<Result<U, E>, PreludeError>
    where
        T: Any,
        U: Any,
        E: Any,
    {
        match self {
            Self::Ok(value) => downcast_payload::<T, Result<U, E>>("try_flatten", value),
            Self::Err(err) => StdResult::Ok(Result::Err(err)),
        }
    }

    /// 実行時にしか型が分からない成功値を `Option<U>` とみなして入れ替える。
    ///
    /// 成功値が `Option<U>` でなければ [`PreludeError::TypeMismatch`] を返す。
    pub fn try_transpose<U>(self) -> StdResult<Option<Result<U, E>>, PreludeError>
    where
        T: Any,
        U: Any,
    {
        match self {
            Self::Ok(value) => {
                downcast_payload::<T, Option<U>>("try_transpose", value).map(|inner| {
                    match inner {
                        Option::Some(value) => Option::Some(Result::Ok(value)),
                        Option::Nothing => Option::Nothing,
                    }
                })
            }
            Self::Err(err) => StdResult::Ok(Option::Some(Result::Err(err))),
        }
    }
}

fn downcast_payload<T, C>(operation: &'static str, value: T) -> StdResult<C, PreludeError>
where
    T: Any,
    C: Any,
{
    let boxed: Box<dyn Any> = Box::new(value);
    match boxed.downcast::<C>() {
        StdResult::Ok(container) => StdResult::Ok(*container),
        StdResult::Err(_) => StdResult::Err(PreludeError::type_mismatch(
            operation,
            any::type_name::<C>(),
            any::type_name::<T>(),
        )),
    }
}

impl<T, E> Result<&T, &E> {
    /// 保持している側のペイロードを `Clone` で複製する（深いコピー）。
    #[must_use = "cloned は新しい値を返すだけです"]
    pub fn cloned(self) -> Result<T, E>
    where
        T: Clone,
        E: Clone,
    {
        match self {
            Self::Ok(value) => Result::Ok(value.clone()),
            Self::Err(err) => Result::Err(err.clone()),
        }
    }

    /// 保持している側のペイロードをビット単位で複製する（浅いコピー）。
    #[must_use = "copied は新しい値を返すだけです"]
    pub fn copied(self) -> Result<T, E>
    where
        T: Copy,
        E: Copy,
    {
        match self {
            Self::Ok(&value) => Result::Ok(value),
            Self::Err(&err) => Result::Err(err),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// `Result<Result<T, E>, E>` を 1 段平坦化する。
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(err) => Result::Err(err),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// `Result<Option<T>, E>` を `Option<Result<T, E>>` へ入れ替える。
    ///
    /// `Ok(Nothing)` だけが `Nothing` になり、`Err(e)` は `Some(Err(e))` になる。
    #[inline]
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Self::Ok(Option::Some(value)) => Option::Some(Result::Ok(value)),
            Self::Ok(Option::Nothing) => Option::Nothing,
            Self::Err(err) => Option::Some(Result::Err(err)),
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            StdResult::Ok(value) => Self::Ok(value),
            StdResult::Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => StdResult::Ok(value),
            Result::Err(err) => StdResult::Err(err),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.ok().unwrap_or_none())
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Result<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// 最初の `Err` で収集を打ち切り、そのエラーを返す。
impl<A, E, V> FromIterator<Result<A, E>> for Result<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<A, E>>,
    {
        match try_collect(iter) {
            ControlFlow::Continue(collected) => Self::Ok(collected),
            ControlFlow::Break(residual) => Self::from_residual(residual),
        }
    }
}

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = Result<Never, E>;

    #[inline]
    fn from_output(output: Self::Output) -> Self {
        Self::Ok(output)
    }

    #[inline]
    fn from_residual(residual: Self::Residual) -> Self {
        match residual {
            Result::Ok(never) => never.absurd(),
            Result::Err(err) => Self::Err(err),
        }
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Self::Ok(value) => ControlFlow::Continue(value),
            Self::Err(err) => ControlFlow::Break(Result::Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_predicates_agree_with_methods() {
        let ok: Result<i32, &str> = Result::Ok(1);
        let err: Result<i32, &str> = Result::Err("e");
        assert!(is_ok(&ok) && ok.is_ok());
        assert!(is_err(&err) && err.is_err());
        assert!(!is_err(&ok));
        assert!(!is_ok(&err));
    }

    #[test]
    fn std_conversion_preserves_variant() {
        let ok: Result<i32, String> = StdResult::<i32, String>::Ok(3).into();
        assert_eq!(ok, Result::Ok(3));
        let back: StdResult<i32, String> = Result::<i32, String>::Err("x".into()).into();
        assert_eq!(back, StdResult::Err("x".to_string()));
    }

    #[test]
    fn downcast_payload_names_both_types() {
        let err = downcast_payload::<u8, Option<u8>>("try_transpose", 1)
            .expect_err("u8 is not an Option");
        assert_eq!(err.kind(), crate::PreludeErrorKind::TypeMismatch);
        assert!(err.to_string().contains("found u8"), "{err}");
    }

    #[test]
    fn collect_returns_first_error() {
        let collected: Result<Vec<i32>, String> = ["1", "x", "y"]
            .iter()
            .map(|text| -> Result<i32, String> {
                text.parse::<i32>()
                    .map_err(|_| format!("bad {text}"))
                    .into()
            })
            .collect();
        assert_eq!(collected, Result::Err("bad x".to_string()));
    }

    #[test]
    fn into_iter_yields_success_only() {
        let ok: Result<i32, ()> = Result::Ok(5);
        let err: Result<i32, ()> = Result::Err(());
        assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(err.into_iter().count(), 0);
    }
}
