//! 値を持たない発散型。

/// 値を生成しないための Zero-Sized Type。
///
/// [`crate::try_support::Try`] の Residual が「成功値を持たない」ことを型で表すために使う。
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Never {}

impl Never {
    /// `match` 展開での発散伝播を担保するためのヘルパ。
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}
