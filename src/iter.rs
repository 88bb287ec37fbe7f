//! `Option` / `Result` が共有する 0〜1 要素のイテレータ。
//!
//! `iter()` / `iter_mut()` は呼び出しごとに新しいイテレータを返すため、
//! 同じコンテナを何度でも走査し直せる。

use crate::try_support::{ControlFlow, Try};
use std::iter::FusedIterator;

type Slot<T> = std::option::Option<T>;

/// 共有参照を高々 1 回返すイテレータ。
#[derive(Debug)]
pub struct Iter<'a, T> {
    slot: Slot<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slot: Slot<&'a T>) -> Self {
        Self { slot }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { slot: self.slot }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Slot<&'a T> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Slot<usize>) {
        let n = usize::from(self.slot.is_some());
        (n, Slot::Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Slot<&'a T> {
        self.slot.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// 可変参照を高々 1 回返すイテレータ。返された参照経由の変更は元のコンテナに残る。
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slot: Slot<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slot: Slot<&'a mut T>) -> Self {
        Self { slot }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Slot<&'a mut T> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Slot<usize>) {
        let n = usize::from(self.slot.is_some());
        (n, Slot::Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Slot<&'a mut T> {
        self.slot.take()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// 値を所有したまま高々 1 回返すイテレータ。
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    slot: Slot<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slot: Slot<T>) -> Self {
        Self { slot }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Slot<T> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Slot<usize>) {
        let n = usize::from(self.slot.is_some());
        (n, Slot::Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Slot<T> {
        self.slot.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// `FromIterator` 実装の補助。最初の Residual で停止し、以降の要素は読まない。
pub(crate) fn try_collect<I, C, V>(iter: I) -> ControlFlow<C::Residual, V>
where
    I: IntoIterator<Item = C>,
    C: Try,
    V: FromIterator<C::Output>,
{
    let mut residual = Slot::None;
    let collected = iter
        .into_iter()
        .map_while(|item| match item.branch() {
            ControlFlow::Continue(output) => Slot::Some(output),
            ControlFlow::Break(stop) => {
                residual = Slot::Some(stop);
                Slot::None
            }
        })
        .collect();
    match residual {
        Slot::Some(stop) => ControlFlow::Break(stop),
        Slot::None => ControlFlow::Continue(collected),
    }
}
