//! `Option` / `Result` の代数的コンテナと、その組み合わせ子一式。
//!
//! - [`Option`]: `Some(T)` / `Nothing`
//! - [`Result`]: `Ok(T)` / `Err(E)`
//!
//! 取り出しに失敗する操作（`unwrap` 系）は [`PreludeError`] のメッセージで panic し、
//! 既定値や入れ子の型に依存する操作は `std::result::Result<_, PreludeError>` を返す。
//! ライブラリ自身はログを出さず、失敗は常にその場で呼び出し元へ返す。
//!
//! ```
//! use variant_prelude::prelude::*;
//!
//! let parsed: Result<i32, &str> = Ok(100);
//! assert_eq!(parsed.map(|v| v * v), Ok(10_000));
//! assert_eq!(parsed.ok(), Some(100));
//!
//! let missing: Option<i32> = Nothing;
//! assert_eq!(missing.ok_or("absent"), Err("absent"));
//! assert_eq!(Ok::<_, &str>(Some(1)).transpose(), Some(Ok(1)));
//! ```

pub mod error;
pub mod iter;
pub mod never;
pub mod option;
pub mod result;
pub mod try_support;

pub use error::{PreludeError, PreludeErrorKind};
pub use never::Never;
pub use option::{nothing, Option};
pub use result::{is_err, is_ok, Result};
pub use try_support::{ControlFlow, Try};

/// グロブ import 用の再エクスポート。
///
/// バリアント（`Some` / `Nothing` / `Ok` / `Err`）も持ち込むため、
/// 標準の `Option` / `Result` とそのバリアントを置き換える。
pub mod prelude {
    pub use crate::option::{
        nothing,
        Option::{self, Nothing, Some},
    };
    pub use crate::result::{
        is_err, is_ok,
        Result::{self, Err, Ok},
    };
    pub use crate::try_chain;
    pub use crate::try_support::Try;
}
