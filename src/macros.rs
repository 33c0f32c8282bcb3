//! Macros shared by the intrinsic modules.

/// Declares a group of runtime-support intrinsics.
///
/// Every function is emitted as written. With the `export-symbols` feature the function is
/// also marked `no_mangle`, so its symbol is the bare C name a code generator emits calls to
/// (`__mulsi3`, `__udivsi3`, ...). Without the feature the functions are ordinary Rust items
/// that can be called and tested on a host which already links its own copies.
///
/// ```ignore
/// intrinsics! {
///     /// Doc comments and other attributes are forwarded.
///     pub extern "C" fn __udivsi3(n: u32, d: u32) -> u32 {
///         u32_div_rem(n, d).0
///     }
/// }
/// ```
macro_rules! intrinsics {
    () => ();

    (
        $(#[$($attr:tt)*])*
        pub extern $abi:tt fn $name:ident( $($argname:ident: $ty:ty),* ) $(-> $ret:ty)? {
            $($body:tt)*
        }

        $($rest:tt)*
    ) => (
        $(#[$($attr)*])*
        #[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
        pub extern $abi fn $name( $($argname: $ty),* ) $(-> $ret)? {
            $($body)*
        }

        intrinsics!($($rest)*);
    );
}
