#[cfg(feature = "tracing")]
macro_rules! ptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "pages", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! pdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "pages", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! pwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "pages", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pwarn {
    ($($tt:tt)*) => {};
}

/// Builds a [`PageSet`](crate::PageSet) of boxed trait objects from a fixed list of
/// heterogeneous page contents.
///
/// The first argument is the erased content type, the rest are the pages in declaration order:
///
/// ```
/// use core::fmt::Display;
///
/// let set = pages::static_pages![dyn Display; "intro", 42, 'x'];
/// assert_eq!(set.len(), 3);
/// assert_eq!(set[1].content().to_string(), "42");
/// ```
///
/// Declaring zero pages, or more than [`MAX_STATIC_PAGES`](crate::MAX_STATIC_PAGES), fails to
/// compile:
///
/// ```compile_fail
/// let _ = pages::static_pages![dyn core::fmt::Debug; 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
/// ```
#[macro_export]
macro_rules! static_pages {
    ($erased:ty; $($page:expr),+ $(,)?) => {{
        const {
            let count = [$(stringify!($page)),+].len();
            assert!(
                count <= $crate::MAX_STATIC_PAGES,
                "static_pages!: too many pages"
            );
        }
        match $crate::PageSet::<$crate::__Box<$erased>>::from_static(
            [$($crate::__Box::new($page) as $crate::__Box<$erased>),+]
        ) {
            Ok(set) => set,
            Err(_) => unreachable!("arity is checked at compile time"),
        }
    }};
}
