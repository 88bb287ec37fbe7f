//! 早期脱出（`?` 相当）のための `Try` 契約。
//!
//! `core::ops::Try` は安定版で実装できないため、同じ形の独自契約を用意し、
//! [`try_chain!`](crate::try_chain) マクロから利用する。

/// `std::ops::ControlFlow` に似た分岐結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow<B, C> {
    /// 失敗（Break）ケース。
    Break(B),
    /// 成功（Continue）ケース。
    Continue(C),
}

impl<B, C> ControlFlow<B, C> {
    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    pub fn break_value(self) -> crate::Option<B> {
        match self {
            Self::Break(residual) => crate::Option::Some(residual),
            Self::Continue(_) => crate::Option::Nothing,
        }
    }

    pub fn continue_value(self) -> crate::Option<C> {
        match self {
            Self::Break(_) => crate::Option::Nothing,
            Self::Continue(output) => crate::Option::Some(output),
        }
    }
}

/// 早期脱出に対応するコンテナの契約。
pub trait Try {
    /// 正常時に得られる値。
    type Output;
    /// 脱出時に保持する Residual。
    type Residual;

    /// 成功値から `Self` を構築する。
    fn from_output(output: Self::Output) -> Self;

    /// Residual から `Self` を再構築する。Residual の型が一致するコンテナ同士で脱出を伝播できる。
    fn from_residual(residual: Self::Residual) -> Self;

    /// 続行するか脱出するかを判定する。
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output>;
}

/// `Try` を実装する式を評価し、脱出時は呼び出し元の戻り値型へ Residual を伝播する。
///
/// ```
/// use variant_prelude::{try_chain, Option, Result};
///
/// fn halve(value: i32) -> Result<i32, String> {
///     if value % 2 == 0 {
///         Result::Ok(value / 2)
///     } else {
///         Result::Err(format!("{value} is odd"))
///     }
/// }
///
/// fn quarter(value: i32) -> Result<i32, String> {
///     let half = try_chain!(halve(value));
///     halve(half)
/// }
///
/// assert_eq!(quarter(8), Result::Ok(2));
/// assert_eq!(quarter(6), Result::Err("3 is odd".to_string()));
///
/// fn first_char_code(text: Option<&str>) -> Option<u32> {
///     let text = try_chain!(text);
///     text.chars().next().map(u32::from).into()
/// }
///
/// assert_eq!(first_char_code(Option::Some("A")), Option::Some(65));
/// assert_eq!(first_char_code(Option::Nothing), Option::Nothing);
/// ```
#[macro_export]
macro_rules! try_chain {
    ($expr:expr $(,)?) => {
        match $crate::try_support::Try::branch($expr) {
            $crate::try_support::ControlFlow::Continue(output) => output,
            $crate::try_support::ControlFlow::Break(residual) => {
                return $crate::try_support::Try::from_residual(residual);
            }
        }
    };
}
