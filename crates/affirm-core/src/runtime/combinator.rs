// crates/affirm-core/src/runtime/combinator.rs
// ============================================================================
// Module: Affirm Combinators
// Description: Predicate contract plus `any_of` / `none_of` composition.
// Purpose: Compose assertions into disjunctions with one aggregated failure.
// Dependencies: crate::core::{format, issue, value}, tracing
// ============================================================================

//! ## Overview
//! A [`Predicate`] is a zero-argument check returning `Ok(())` when its
//! condition holds and an error otherwise. Any closure returning a `Result`
//! qualifies; the success payload (usually a narrowed view of the checked
//! value) is discarded.
//!
//! [`any_of`] and [`none_of`] evaluate branches strictly left to right and
//! stop at the first passing branch. Only the library's own
//! [`AssertionError`]s are recovered from; any other error is handed back to
//! the caller untouched. Every element is validated as callable before the
//! first branch runs.
//!
//! Both combinators keep all bookkeeping local to one call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;
use tracing::trace;

use crate::core::format::render;
use crate::core::issue::AssertionError;
use crate::core::issue::CheckError;
use crate::core::issue::Issue;
use crate::core::issue::codes;
use crate::core::value::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator joining failed `expected` descriptions in `NOT_ANY_OF`.
pub const DISJUNCTION_SEPARATOR: &str = " | ";

/// Message raised for a non-callable combinator element.
const NOT_CALLABLE_MESSAGE: &str = "Expected value to be a function";

// ============================================================================
// SECTION: Failure Classification
// ============================================================================

/// Error types a combinator can evaluate branches with.
///
/// Combinators recover from assertion failures and synthesize their own, so
/// the error type must be able to expose and absorb [`AssertionError`].
pub trait Failure: From<AssertionError> {
    /// Returns the assertion failure, or gives the foreign error back.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when it is not an assertion failure.
    fn into_assertion(self) -> Result<AssertionError, Self>;
}

impl Failure for AssertionError {
    fn into_assertion(self) -> Result<AssertionError, Self> {
        Ok(self)
    }
}

impl Failure for CheckError {
    fn into_assertion(self) -> Result<AssertionError, Self> {
        match self {
            Self::Assertion(error) => Ok(error),
            foreign @ Self::Foreign(_) => Err(foreign),
        }
    }
}

// ============================================================================
// SECTION: Predicate Contract
// ============================================================================

/// A zero-argument check.
pub trait Predicate<E = AssertionError> {
    /// Runs the check.
    ///
    /// # Errors
    ///
    /// Returns the failure when the checked condition does not hold.
    fn check(&self) -> Result<(), E>;
}

impl<F, T, X, E> Predicate<E> for F
where
    F: Fn() -> Result<T, X>,
    X: Into<E>,
{
    fn check(&self) -> Result<(), E> {
        self().map(|_| ()).map_err(Into::into)
    }
}

/// One element of a combinator's input.
pub enum Branch<'a, E = AssertionError> {
    /// A callable check.
    Check(&'a dyn Predicate<E>),
    /// A non-callable element, rejected with `NOT_FUNCTION`.
    Value(Value),
}

impl<'a, E> Branch<'a, E> {
    /// Wraps a predicate.
    pub fn check<P: Predicate<E>>(predicate: &'a P) -> Self {
        Self::Check(predicate)
    }
}

impl<E> From<Value> for Branch<'_, E> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Result of evaluating one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchOutcome {
    /// The branch completed without error.
    Passed,
    /// The branch raised an assertion failure with this code.
    Failed {
        /// Code of the raised failure.
        code: String,
    },
}

/// Trace hook for combinator evaluation.
pub trait CombinatorTrace {
    /// Called once for every evaluated branch, in evaluation order.
    fn on_branch_evaluated(&mut self, index: usize, outcome: &BranchOutcome);
}

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl CombinatorTrace for NoopTrace {
    fn on_branch_evaluated(&mut self, _index: usize, _outcome: &BranchOutcome) {}
}

// ============================================================================
// SECTION: any_of
// ============================================================================

/// Passes when at least one branch passes.
///
/// # Errors
///
/// - `NOT_FUNCTION` when any element is not callable (nothing is evaluated).
/// - `NOT_ANY_OF` when every branch fails. An empty branch list passes.
/// - Any foreign error raised by a branch, unchanged.
pub fn any_of<'a, E, I>(branches: I) -> Result<(), E>
where
    E: Failure + 'a,
    I: IntoIterator<Item = Branch<'a, E>>,
{
    any_of_traced(branches, &mut NoopTrace)
}

/// [`any_of`] with a trace hook observing each evaluated branch.
///
/// # Errors
///
/// Same as [`any_of`].
pub fn any_of_traced<'a, E, I, T>(branches: I, tracer: &mut T) -> Result<(), E>
where
    E: Failure + 'a,
    I: IntoIterator<Item = Branch<'a, E>>,
    T: CombinatorTrace + ?Sized,
{
    let predicates = callable_branches(branches)?;
    let mut failures: Vec<AssertionError> = Vec::with_capacity(predicates.len());
    for (index, predicate) in predicates.into_iter().enumerate() {
        match predicate.check() {
            Ok(()) => {
                tracer.on_branch_evaluated(index, &BranchOutcome::Passed);
                debug!(index, discarded = failures.len(), "any_of satisfied");
                return Ok(());
            }
            Err(failure) => {
                let error = failure.into_assertion()?;
                trace!(index, code = error.code(), "any_of branch failed");
                tracer.on_branch_evaluated(
                    index,
                    &BranchOutcome::Failed {
                        code: error.code().to_string(),
                    },
                );
                failures.push(error);
            }
        }
    }

    if failures.is_empty() {
        debug!("any_of called without branches");
        return Ok(());
    }
    let error = aggregate_failures(failures);
    debug!(expected = %error.expected(), "any_of exhausted every branch");
    Err(E::from(error))
}

/// Synthesizes the `NOT_ANY_OF` failure from every failed branch.
fn aggregate_failures(failures: Vec<AssertionError>) -> AssertionError {
    let expected = failures
        .iter()
        .map(|failure| render(failure.expected()))
        .collect::<Vec<_>>()
        .join(DISJUNCTION_SEPARATOR);
    let received = failures
        .into_iter()
        .next()
        .map_or(Value::Undefined, |first| first.into_issue().received);
    AssertionError::new(Issue::new(
        codes::NOT_ANY_OF,
        format!("Expected any of: {expected}"),
        received,
        expected,
    ))
}

// ============================================================================
// SECTION: none_of
// ============================================================================

/// Passes when every branch fails.
///
/// # Errors
///
/// - `NOT_FUNCTION` when any element is not callable (nothing is evaluated).
/// - `UNEXPECTED_PASS` naming the index of the first passing branch.
/// - Any foreign error raised by a branch, unchanged.
pub fn none_of<'a, E, I>(branches: I) -> Result<(), E>
where
    E: Failure + 'a,
    I: IntoIterator<Item = Branch<'a, E>>,
{
    none_of_traced(branches, &mut NoopTrace)
}

/// [`none_of`] with a trace hook observing each evaluated branch.
///
/// # Errors
///
/// Same as [`none_of`].
pub fn none_of_traced<'a, E, I, T>(branches: I, tracer: &mut T) -> Result<(), E>
where
    E: Failure + 'a,
    I: IntoIterator<Item = Branch<'a, E>>,
    T: CombinatorTrace + ?Sized,
{
    let predicates = callable_branches(branches)?;
    for (index, predicate) in predicates.into_iter().enumerate() {
        match predicate.check() {
            Ok(()) => {
                tracer.on_branch_evaluated(index, &BranchOutcome::Passed);
                debug!(index, "none_of branch unexpectedly passed");
                return Err(E::from(AssertionError::new(Issue::new(
                    codes::UNEXPECTED_PASS,
                    format!(
                        "Assertion at index {index} unexpectedly passed (it should have failed)"
                    ),
                    "assertion passed",
                    "assertion to fail",
                ))));
            }
            Err(failure) => {
                let error = failure.into_assertion()?;
                trace!(index, code = error.code(), "none_of branch failed as required");
                tracer.on_branch_evaluated(
                    index,
                    &BranchOutcome::Failed {
                        code: error.code().to_string(),
                    },
                );
            }
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Collects the branches, rejecting the first non-callable element.
fn callable_branches<'a, E>(
    branches: impl IntoIterator<Item = Branch<'a, E>>,
) -> Result<Vec<&'a dyn Predicate<E>>, E>
where
    E: Failure + 'a,
{
    let mut predicates = Vec::new();
    for (index, branch) in branches.into_iter().enumerate() {
        match branch {
            Branch::Check(predicate) => predicates.push(predicate),
            Branch::Value(value) => {
                debug!(index, kind = value.type_name(), "combinator element is not callable");
                return Err(E::from(AssertionError::new(Issue::new(
                    codes::NOT_FUNCTION,
                    NOT_CALLABLE_MESSAGE,
                    value,
                    "function",
                ))));
            }
        }
    }
    Ok(predicates)
}

// ============================================================================
// SECTION: Macros
// ============================================================================

/// Builds an [`any_of`] call from predicate expressions.
///
/// ```ignore
/// any_of!(|| assert_number(&value, None), || assert_bigint(&value, None))?;
/// ```
#[macro_export]
macro_rules! any_of {
    ($($predicate:expr),+ $(,)?) => {
        $crate::runtime::combinator::any_of([
            $($crate::runtime::combinator::Branch::check(&$predicate)),+
        ])
    };
}

/// Builds a [`none_of`] call from predicate expressions.
///
/// ```ignore
/// none_of!(|| assert_number(&value, None), || assert_string(&value, None))?;
/// ```
#[macro_export]
macro_rules! none_of {
    ($($predicate:expr),+ $(,)?) => {
        $crate::runtime::combinator::none_of([
            $($crate::runtime::combinator::Branch::check(&$predicate)),+
        ])
    };
}
