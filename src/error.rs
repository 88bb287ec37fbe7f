//! プレリュード操作の失敗分類と構造化診断。
//!
//! `unwrap` 系は [`PreludeError`] の `Display` を panic メッセージとして使い、
//! `unwrap_or_default` / `try_flatten` などの失敗し得る操作は
//! `std::result::Result<_, PreludeError>` を返す。

use serde_json::{Map, Value};
use std::fmt::Debug;
use thiserror::Error;

const RUNTIME_DOMAIN: &str = "prelude";
const EXTENSION_KEY: &str = "prelude.failure";

/// 失敗の種類。
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreludeErrorKind {
    /// 要求したペイロードを持たないバリアントに対する取り出し。
    UnwrapFailed,
    /// 既定値を合成できない。
    NoDefault,
    /// 入れ子コンテナの型が期待と異なる。
    TypeMismatch,
}

impl PreludeErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreludeErrorKind::UnwrapFailed => "unwrap_failed",
            PreludeErrorKind::NoDefault => "no_default",
            PreludeErrorKind::TypeMismatch => "type_mismatch",
        }
    }

    /// 診断コード（`core.prelude.<kind>`）。
    pub fn code(&self) -> &'static str {
        match self {
            PreludeErrorKind::UnwrapFailed => "core.prelude.unwrap_failed",
            PreludeErrorKind::NoDefault => "core.prelude.no_default",
            PreludeErrorKind::TypeMismatch => "core.prelude.type_mismatch",
        }
    }
}

/// `Option` / `Result` 操作の失敗。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreludeError {
    #[error("{message}")]
    UnwrapFailed {
        operation: &'static str,
        message: String,
    },
    #[error("{message}")]
    NoDefault {
        operation: &'static str,
        type_name: &'static str,
        message: String,
    },
    #[error("{message}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
        message: String,
    },
}

impl PreludeError {
    /// `Nothing` に対する `unwrap` 系の失敗。
    pub fn unwrap_on_nothing(operation: &'static str) -> Self {
        Self::UnwrapFailed {
            operation,
            message: format!("Called {operation} on a Nothing value"),
        }
    }

    /// `Err` に対する `unwrap` / `into_ok` の失敗。エラー値の `Debug` 表現を埋め込む。
    pub fn unwrap_on_err(operation: &'static str, error: &dyn Debug) -> Self {
        Self::UnwrapFailed {
            operation,
            message: format!("Called {operation} on an Err value: {error:?}"),
        }
    }

    /// `Ok` に対する `unwrap_err` / `into_err` の失敗。成功値の `Debug` 表現を埋め込む。
    pub fn unwrap_on_ok(operation: &'static str, value: &dyn Debug) -> Self {
        Self::UnwrapFailed {
            operation,
            message: format!("Called {operation} on an Ok value: {value:?}"),
        }
    }

    /// `expect` / `expect_err` の失敗。呼び出し側のメッセージが先頭に来る。
    pub fn expect_failed(operation: &'static str, custom: &str, payload: &dyn Debug) -> Self {
        Self::UnwrapFailed {
            operation,
            message: format!("{custom}: {payload:?}"),
        }
    }

    /// ペイロードを持たない `expect` の失敗。
    pub fn expect_on_nothing(custom: &str) -> Self {
        Self::UnwrapFailed {
            operation: "expect",
            message: custom.to_string(),
        }
    }

    /// 既定値を合成できない。
    pub fn no_default(operation: &'static str, type_name: &'static str) -> Self {
        Self::NoDefault {
            operation,
            type_name,
            message: format!("Called {operation} on an Err value: no default is synthesized for {type_name} without an error handler"),
        }
    }

    /// 入れ子コンテナの型不一致。
    pub fn type_mismatch(
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected,
            found,
            message: format!("{operation} expected a payload of type {expected}, found {found}"),
        }
    }

    pub fn kind(&self) -> PreludeErrorKind {
        match self {
            Self::UnwrapFailed { .. } => PreludeErrorKind::UnwrapFailed,
            Self::NoDefault { .. } => PreludeErrorKind::NoDefault,
            Self::TypeMismatch { .. } => PreludeErrorKind::TypeMismatch,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// 失敗を起こした操作名（`unwrap`, `map_or_default` など）。
    pub fn operation(&self) -> &'static str {
        match self {
            Self::UnwrapFailed { operation, .. }
            | Self::NoDefault { operation, .. }
            | Self::TypeMismatch { operation, .. } => operation,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::UnwrapFailed { message, .. }
            | Self::NoDefault { message, .. }
            | Self::TypeMismatch { message, .. } => message,
        }
    }

    fn extension_payload(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("kind".into(), Value::String(self.kind().as_str().into()));
        obj.insert("operation".into(), Value::String(self.operation().into()));
        match self {
            Self::UnwrapFailed { .. } => {}
            Self::NoDefault { type_name, .. } => {
                obj.insert("type_name".into(), Value::String((*type_name).into()));
            }
            Self::TypeMismatch {
                expected, found, ..
            } => {
                obj.insert("expected".into(), Value::String((*expected).into()));
                obj.insert("found".into(), Value::String((*found).into()));
            }
        }
        Value::Object(obj)
    }

    /// JSON へ変換する補助（ホスト側のロギング・監査向け）。
    pub fn into_json(self) -> Value {
        let mut extensions = Map::new();
        extensions.insert(EXTENSION_KEY.into(), self.extension_payload());
        let mut root = Map::new();
        root.insert("code".into(), Value::String(self.code().into()));
        root.insert("domain".into(), Value::String(RUNTIME_DOMAIN.into()));
        root.insert("kind".into(), Value::String(self.kind().as_str().into()));
        root.insert("operation".into(), Value::String(self.operation().into()));
        root.insert("extensions".into(), Value::Object(extensions));
        let message = match self {
            Self::UnwrapFailed { message, .. }
            | Self::NoDefault { message, .. }
            | Self::TypeMismatch { message, .. } => message,
        };
        root.insert("message".into(), Value::String(message));
        Value::Object(root)
    }
}

/// `unwrap` 系の panic を一箇所に集約する。
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise(error: PreludeError) -> ! {
    panic!("{error}")
}
