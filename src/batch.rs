//! Applying one consumer to many items.
//!
//! Items are consumed in iteration order. The first failure stops the batch
//! and is returned; the remaining items are not visited.

use crate::adapter::ThrowingConsumer;

/// Feeds every item of `items` to `consumer`.
///
/// # Errors
///
/// Returns the first error of `consumer`.
///
/// # Examples
///
/// ```rust
/// use throwing::adapter::Consumer;
/// use throwing::batch::with_each;
///
/// let mut buffer = String::new();
/// with_each(['t', 'e', 's', 't'], Consumer::new(|character: char| {
///     buffer.push(character);
///     Ok::<_, std::fmt::Error>(())
/// }))?;
/// assert_eq!(buffer, "test");
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn with_each<I, E, C>(items: I, mut consumer: C) -> Result<(), E>
where
    I: IntoIterator,
    C: ThrowingConsumer<I::Item, E>,
{
    items
        .into_iter()
        .try_for_each(|item| consumer.accept_throwing(item))
}

/// Feeds every item of `items` to `action`.
///
/// The argument order of [`with_each`], reversed, for call sites where the
/// action reads better first.
///
/// # Errors
///
/// Returns the first error of `action`.
#[inline]
pub fn do_for_each<C, E, I>(action: C, items: I) -> Result<(), E>
where
    I: IntoIterator,
    C: ThrowingConsumer<I::Item, E>,
{
    with_each(items, action)
}
