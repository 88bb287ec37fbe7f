//! `Option` 型と、その組み合わせ子一式。
//!
//! 値の有無を `Some(T)` / `Nothing` の閉じた 2 バリアントで表す。
//! すべての操作は両バリアントを網羅的に `match` し、ワイルドカード腕を持たない。

use crate::{
    error::{raise, PreludeError},
    iter::{try_collect, IntoIter, Iter, IterMut},
    never::Never,
    result::Result,
    try_support::{ControlFlow, Try},
};
use std::any::{self, Any};

type StdOption<T> = std::option::Option<T>;
type StdResult<T, E> = std::result::Result<T, E>;

/// 値の有無を表す Option 互換型。
///
/// `Nothing` はペイロードを持たない単位バリアントで、[`Option::NOTHING`] /
/// [`nothing`] が共有の番兵値になる。不変かつ空なので、スレッド間を含め
/// どこで共有しても安全。
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "Option の戻り値を無視すると値の有無を見逃します"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// 値が存在しないケース。
    Nothing,
    /// 値を保持するケース。
    Some(T),
}

/// 共有の `Nothing` 番兵を返す。
#[inline]
pub const fn nothing<T>() -> Option<T> {
    Option::Nothing
}

impl<T> Option<T> {
    /// 共有の `Nothing` 番兵。
    pub const NOTHING: Self = Self::Nothing;

    /// ホスト側のネイティブな「値なし」（`std::option::Option`）から変換する。
    #[inline]
    pub fn from_optional(value: StdOption<T>) -> Self {
        match value {
            StdOption::Some(value) => Self::Some(value),
            StdOption::None => Self::Nothing,
        }
    }

    /// 値を取り出し、`Nothing` の場合はネイティブな `None` を返す。
    ///
    /// [`Option::from_optional`] の逆変換で、`from_optional(v).unwrap_or_none() == v` が常に成り立つ。
    #[inline]
    pub fn unwrap_or_none(self) -> StdOption<T> {
        match self {
            Self::Some(value) => StdOption::Some(value),
            Self::Nothing => StdOption::None,
        }
    }

    /// `Some` であるかどうかを判定する。
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// `Nothing` であるかどうかを判定する。
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// `Some` かつ述語を満たすときに `true`。`Nothing` では述語を呼ばない。
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::Nothing => false,
        }
    }

    /// `Nothing` または述語を満たす `Some` のときに `true`。
    #[inline]
    pub fn is_none_or<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::Nothing => true,
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::Nothing => Option::Nothing,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::Nothing => Option::Nothing,
        }
    }

    /// `Some` を保証し、`Nothing` の場合は `message` で panic する。
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => raise(PreludeError::expect_on_nothing(message)),
        }
    }

    /// 値を取り出す。`Nothing` の場合は panic する。
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => raise(PreludeError::unwrap_on_nothing("unwrap")),
        }
    }

    /// `Nothing` のときに既定値を返す。
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// `Nothing` のときに遅延評価した既定値を返す。
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default(),
        }
    }

    /// `Nothing` のときに `T::default()` を返す。
    ///
    /// ゼロ値を持たない型は `Default` を実装しないため、コンパイル時に拒否される。
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => T::default(),
        }
    }

    /// 値を写像し、新しい `Option` を返す。
    #[inline]
    #[must_use = "map の結果を無視すると計算が消失します"]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(f(value)),
            Self::Nothing => Option::Nothing,
        }
    }

    /// 値があればコールバックへ参照を渡し、自身をそのまま返す。
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value),
            Self::Nothing => default,
        }
    }

    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value),
            Self::Nothing => default(),
        }
    }

    /// `Option` を `Result` へ昇格させる。エラー値は先に評価済みのものを使う。
    #[inline]
    #[must_use = "ok_or の結果を使わない場合は失敗理由が捨てられます"]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::Nothing => Result::Err(err),
        }
    }

    /// `Option` を `Result` へ昇格させる。エラー値は `Nothing` のときだけ生成する。
    #[inline]
    #[must_use = "ok_or_else の結果を使わない場合は失敗理由が捨てられます"]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::Nothing => Result::Err(err()),
        }
    }

    /// 0〜1 要素のイテレータを返す。呼び出すたびに先頭から走査し直せる。
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().unwrap_or_none())
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut().unwrap_or_none())
    }

    /// 両方が `Some` なら `other` を返す（先行評価）。
    #[inline]
    pub fn and_<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::Nothing => Option::Nothing,
        }
    }

    /// `Option` を連鎖させる（`flat_map`）。
    #[inline]
    #[must_use = "and_then の結果を無視すると副作用が起きません"]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::Nothing => Option::Nothing,
        }
    }

    /// 述語を満たさない `Some` を `Nothing` にする。
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// `Some` なら自身、`Nothing` なら `other` を返す（先行評価）。
    #[inline]
    pub fn or_(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::Nothing => other,
        }
    }

    /// `Nothing` のときだけ代替を計算する。
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::Nothing => f(),
        }
    }

    /// ちょうど一方だけが `Some` のときにその値を返す。
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::Nothing) | (Self::Nothing, Self::Some(value)) => {
                Self::Some(value)
            }
            (Self::Some(_), Self::Some(_)) | (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }

    /// 値を格納し、その可変参照を返す。以前の値は破棄される。
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Some(value);
        match self {
            Self::Some(value) => value,
            Self::Nothing => unreachable!("insert stored Some just before"),
        }
    }

    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// `Nothing` のときだけ `f` の結果を格納し、保持している値の可変参照を返す。
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Self::Nothing = self {
            *self = Self::Some(f());
        }
        match self {
            Self::Some(value) => value,
            Self::Nothing => unreachable!("get_or_insert_with stored Some just before"),
        }
    }

    /// 値を取り出し、自身を `Nothing` にする。
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Nothing)
    }

    /// 述語が `true` を返したときだけ値を取り出す。
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Self
    where
        P: FnOnce(&mut T) -> bool,
    {
        if self.as_mut().map_or(false, predicate) {
            self.take()
        } else {
            Self::Nothing
        }
    }

    /// 新しい値を格納し、以前の値を返す。
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Some(value))
    }

    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Self::Some(left), Option::Some(right)) => Option::Some((left, right)),
            (Self::Some(_), Option::Nothing) | (Self::Nothing, _) => Option::Nothing,
        }
    }

    /// 保持している値と `value` が等しいかを調べる。`Nothing` では常に `false`。
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Some(held) => held == value,
            Self::Nothing => false,
        }
    }

    /// 実行時にしか型が分からないペイロードを `Option<U>` として平坦化する。
    ///
    /// ペイロードが `Option<U>` でなければ [`PreludeError::TypeMismatch`] を返す。
    pub fn try_flatten<U>(self) -> StdResult<Option<U>, PreludeError>
    where
        T: Any,
        U: Any,
    {
        match self {
            Self::Some(value) => {
                let boxed: Box<dyn Any> = Box::new(value);
                match boxed.downcast::<Option<U>>() {
                    StdResult::Ok(inner) => StdResult::Ok(*inner),
                    StdResult::Err(_) => StdResult::Err(PreludeError::type_mismatch(
                        "try_flatten",
                        any::type_name::<Option<U>>(),
                        any::type_name::<T>(),
                    )),
                }
            }
            Self::Nothing => StdResult::Ok(Option::Nothing),
        }
    }
}

impl<T> Option<&T> {
    /// 参照先を `Clone` で複製する（深いコピー）。
    #[must_use = "cloned は新しい値を返すだけです"]
    pub fn cloned(self) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Self::Some(value) => Option::Some(value.clone()),
            Self::Nothing => Option::Nothing,
        }
    }

    /// 参照先をビット単位で複製する（浅いコピー）。
    #[must_use = "copied は新しい値を返すだけです"]
    pub fn copied(self) -> Option<T>
    where
        T: Copy,
    {
        match self {
            Self::Some(&value) => Option::Some(value),
            Self::Nothing => Option::Nothing,
        }
    }
}

impl<T> Option<&mut T> {
    #[must_use = "cloned は新しい値を返すだけです"]
    pub fn cloned(self) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Self::Some(value) => Option::Some(value.clone()),
            Self::Nothing => Option::Nothing,
        }
    }

    #[must_use = "copied は新しい値を返すだけです"]
    pub fn copied(self) -> Option<T>
    where
        T: Copy,
    {
        match self {
            Self::Some(&mut value) => Option::Some(value),
            Self::Nothing => Option::Nothing,
        }
    }
}

impl<T> Option<Option<T>> {
    /// `Option<Option<T>>` を 1 段平坦化する。
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::Nothing => Option::Nothing,
        }
    }
}

impl<T, E> Option<Result<T, E>> {
    /// `Option<Result<T, E>>` を `Result<Option<T>, E>` へ入れ替える。
    #[inline]
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Self::Some(Result::Ok(value)) => Result::Ok(Option::Some(value)),
            Self::Some(Result::Err(err)) => Result::Err(err),
            Self::Nothing => Result::Ok(Option::Nothing),
        }
    }
}

impl<T, U> Option<(T, U)> {
    #[inline]
    pub fn unzip(self) -> (Option<T>, Option<U>) {
        match self {
            Self::Some((left, right)) => (Option::Some(left), Option::Some(right)),
            Self::Nothing => (Option::Nothing, Option::Nothing),
        }
    }
}

impl<T> Default for Option<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    #[inline]
    fn from(value: StdOption<T>) -> Self {
        Self::from_optional(value)
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.unwrap_or_none()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.unwrap_or_none())
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Option<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// 最初の `Nothing` で収集を打ち切り、`Nothing` を返す。
impl<A, V> FromIterator<Option<A>> for Option<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Option<A>>,
    {
        match try_collect(iter) {
            ControlFlow::Continue(collected) => Self::Some(collected),
            ControlFlow::Break(residual) => Self::from_residual(residual),
        }
    }
}

impl<T> Try for Option<T> {
    type Output = T;
    type Residual = Option<Never>;

    #[inline]
    fn from_output(output: Self::Output) -> Self {
        Self::Some(output)
    }

    #[inline]
    fn from_residual(residual: Self::Residual) -> Self {
        match residual {
            Option::Some(never) => never.absurd(),
            Option::Nothing => Self::Nothing,
        }
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Self::Some(value) => ControlFlow::Continue(value),
            Self::Nothing => ControlFlow::Break(Option::Nothing),
        }
    }
}
