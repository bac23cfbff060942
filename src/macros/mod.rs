//! Shorthand macros for building failures.
//!
//! - [`macro@crate::fail`] - formats a [`MessageError`](crate::errors::MessageError)
//!   and converts it into whichever outcome type the surrounding code expects,
//!   optionally wrapping a cause.
//! - [`macro@crate::ensure`] - returns early with [`macro@crate::fail`] when a
//!   condition does not hold.
//!
//! # Examples
//!
//! ```
//! use causal_rail::{ensure, fail, Outcome, TypedOutcome};
//!
//! fn check_balance(balance: i64, amount: i64) -> Outcome {
//!     ensure!(amount > 0, "amount must be positive, got {}", amount);
//!     ensure!(balance >= amount, "insufficient funds: {} < {}", balance, amount);
//!     Outcome::success()
//! }
//!
//! fn withdraw(balance: i64, amount: i64) -> TypedOutcome<i64> {
//!     let checked = check_balance(balance, amount);
//!     if checked.is_failure() {
//!         return fail!(checked => "withdrawing {}", amount);
//!     }
//!     TypedOutcome::success(balance - amount)
//! }
//!
//! assert_eq!(withdraw(100, 30).into_value(), Some(70));
//! assert_eq!(
//!     withdraw(10, 30).to_string(),
//!     "withdrawing 30 -> insufficient funds: 10 < 30"
//! );
//! ```

/// Builds a failed outcome from a formatted message.
///
/// The expression converts (through `From<Failure>`) into [`Outcome`](crate::Outcome),
/// [`TypedOutcome`](crate::TypedOutcome) or [`Failure`](crate::Failure), whichever
/// the context asks for.
///
/// # Syntax
///
/// - `fail!("format {}", args)` - a terminal failure
/// - `fail!(cause => "format {}", args)` - a failure wrapping `cause`
///
/// # Panics
///
/// The `cause =>` form panics if `cause` is a success.
///
/// # Examples
///
/// ```
/// use causal_rail::{fail, Outcome};
///
/// let root: Outcome = fail!("disk {} unavailable", "sda1");
/// let outer: Outcome = fail!(root => "mounting volume");
/// assert_eq!(outer.to_string(), "mounting volume -> disk sda1 unavailable");
/// ```
#[macro_export]
macro_rules! fail {
    ($cause:expr => $($arg:tt)+) => {
        ::core::convert::From::from($crate::Failure::caused_by(
            $crate::errors::MessageError::new($crate::__private::format!($($arg)+)),
            $cause,
        ))
    };
    ($($arg:tt)+) => {
        ::core::convert::From::from($crate::Failure::new(
            $crate::errors::MessageError::new($crate::__private::format!($($arg)+)),
        ))
    };
}

/// Returns early with [`fail!`](crate::fail) when `cond` is false.
///
/// # Examples
///
/// ```
/// use causal_rail::{ensure, TypedOutcome};
///
/// fn halve(n: u32) -> TypedOutcome<u32> {
///     ensure!(n % 2 == 0, "{} is odd", n);
///     TypedOutcome::success(n / 2)
/// }
///
/// assert_eq!(halve(8).into_value(), Some(4));
/// assert_eq!(halve(7).to_string(), "7 is odd");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return $crate::fail!($($arg)+);
        }
    };
}
