// crates/affirm-core/src/core/value.rs
// ============================================================================
// Module: Affirm Runtime Values
// Description: Dynamically-typed values inspected by assertions.
// Purpose: Provide a closed value model with primitive and reference semantics.
// Dependencies: indexmap, num-bigint, regex, time
// ============================================================================

//! ## Overview
//! Assertions validate values whose shape is only known at runtime. [`Value`]
//! is the closed set of shapes the library understands. Primitives compare by
//! value; symbols and composites are reference values held behind [`Rc`], so a
//! clone shares identity with its source and [`Rc::ptr_eq`] is the identity
//! test.
//!
//! Composites are immutable once built. A value graph can therefore never
//! contain itself, which keeps every recursive walk finite.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use num_bigint::BigInt;
use num_bigint::Sign;
use regex::Regex;
use regex::RegexBuilder;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Canonical ordering of regular-expression flags.
const FLAG_ORDER: &str = "dgimsuvy";

/// Nanoseconds per millisecond, used to project instants onto epoch millis.
const NANOS_PER_MILLI: i128 = 1_000_000;

// ============================================================================
// SECTION: Value
// ============================================================================

/// A dynamically-typed runtime value.
///
/// # Invariants
/// - `Symbol` and every composite variant are shared handles; cloning keeps identity.
/// - Composite contents never change after construction.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The explicit null value.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// IEEE-754 number primitive.
    Number(f64),
    /// Arbitrary-precision integer primitive.
    BigInt(BigInt),
    /// String primitive.
    String(String),
    /// Unique symbol; equal only to itself.
    Symbol(Rc<SymbolValue>),
    /// Timestamp object.
    Date(Rc<DateValue>),
    /// Regular-expression object.
    RegExp(Rc<Pattern>),
    /// Ordered sequence.
    Array(Rc<Vec<Self>>),
    /// Insertion-ordered key-value map with native key equality.
    Map(Rc<MapValue>),
    /// Insertion-ordered set with native membership.
    Set(Rc<SetValue>),
    /// Plain string-keyed record.
    Record(Rc<Record>),
    /// Opaque callable handle.
    Function(Rc<FunctionValue>),
    /// Opaque class instance.
    Instance(Rc<Instance>),
}

/// Runtime category of a [`Value`], computed once per comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `undefined` or `null`.
    Absent,
    /// Boolean, number, bigint, string, or symbol.
    Scalar,
    /// Date.
    Temporal,
    /// Regular expression.
    Pattern,
    /// Array.
    Sequence,
    /// Map.
    Map,
    /// Set.
    Set,
    /// Plain record.
    Record,
    /// Function or class instance.
    Opaque,
}

impl Value {
    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    /// Creates a bigint value.
    pub fn bigint(value: impl Into<BigInt>) -> Self {
        Self::BigInt(value.into())
    }

    /// Creates a fresh symbol with a description.
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(Rc::new(SymbolValue {
            description: Some(description.into()),
        }))
    }

    /// Creates a fresh symbol without a description.
    #[must_use]
    pub fn anonymous_symbol() -> Self {
        Self::Symbol(Rc::new(SymbolValue {
            description: None,
        }))
    }

    /// Creates a date from epoch milliseconds; out-of-range inputs yield an invalid date.
    #[must_use]
    pub fn date_from_millis(millis: i64) -> Self {
        Self::Date(Rc::new(DateValue::from_millis(millis)))
    }

    /// Creates a date from an RFC 3339 timestamp; unparsable input yields an invalid date.
    #[must_use]
    pub fn date_rfc3339(text: &str) -> Self {
        Self::Date(Rc::new(DateValue::parse_rfc3339(text)))
    }

    /// Creates a date from an instant.
    #[must_use]
    pub fn date(instant: OffsetDateTime) -> Self {
        Self::Date(Rc::new(DateValue {
            instant: Some(instant),
        }))
    }

    /// Creates an invalid date (a date with no instant).
    #[must_use]
    pub fn invalid_date() -> Self {
        Self::Date(Rc::new(DateValue {
            instant: None,
        }))
    }

    /// Creates a regular-expression value.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the flags or the source are invalid.
    pub fn reg_exp(source: impl Into<String>, flags: &str) -> Result<Self, PatternError> {
        Ok(Self::RegExp(Rc::new(Pattern::new(source, flags)?)))
    }

    /// Creates an array value.
    pub fn array(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Array(Rc::new(items.into_iter().collect()))
    }

    /// Creates a map value; later duplicate keys overwrite earlier ones.
    pub fn map(entries: impl IntoIterator<Item = (Self, Self)>) -> Self {
        Self::Map(Rc::new(entries.into_iter().collect()))
    }

    /// Creates a set value; duplicate elements are dropped.
    pub fn set(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Set(Rc::new(items.into_iter().collect()))
    }

    /// Creates a plain record value.
    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Self)>) -> Self {
        Self::Record(Rc::new(fields.into_iter().collect()))
    }

    /// Creates an opaque function handle.
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(Rc::new(FunctionValue {
            name: name.into(),
        }))
    }

    /// Creates an instance of `class` with the given own fields.
    pub fn instance<K: Into<String>>(
        class: &Class,
        fields: impl IntoIterator<Item = (K, Self)>,
    ) -> Self {
        Self::Instance(Rc::new(Instance {
            class: class.clone(),
            fields: fields.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }))
    }

    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------

    /// Returns the runtime category of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined | Self::Null => ValueKind::Absent,
            Self::Bool(_)
            | Self::Number(_)
            | Self::BigInt(_)
            | Self::String(_)
            | Self::Symbol(_) => ValueKind::Scalar,
            Self::Date(_) => ValueKind::Temporal,
            Self::RegExp(_) => ValueKind::Pattern,
            Self::Array(_) => ValueKind::Sequence,
            Self::Map(_) => ValueKind::Map,
            Self::Set(_) => ValueKind::Set,
            Self::Record(_) => ValueKind::Record,
            Self::Function(_) | Self::Instance(_) => ValueKind::Opaque,
        }
    }

    /// Returns the type name used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Date(_) => "date",
            Self::RegExp(_) => "regexp",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Set(_) => "set",
            Self::Record(_) | Self::Instance(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns true for `undefined` and `null`.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns whether the value is truthy.
    ///
    /// `false`, `0`, `-0`, `NaN`, `""`, `0n`, `null`, and `undefined` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(value) => !(value.is_nan() || *value == 0.0),
            Self::BigInt(value) => value.sign() != Sign::NoSign,
            Self::String(value) => !value.is_empty(),
            _ => true,
        }
    }

    // ------------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------------

    /// Strict identity: `NaN` equals `NaN`, `+0` differs from `-0`, references by pointer.
    #[must_use]
    pub fn same_value(left: &Self, right: &Self) -> bool {
        match (left, right) {
            (Self::Number(left), Self::Number(right)) => {
                (left.is_nan() && right.is_nan())
                    || (left == right && left.is_sign_negative() == right.is_sign_negative())
            }
            _ => same_primitive_or_reference(left, right),
        }
    }

    /// Native key equality: like [`Value::same_value`] except `+0` equals `-0`.
    #[must_use]
    pub fn same_value_zero(left: &Self, right: &Self) -> bool {
        match (left, right) {
            (Self::Number(left), Self::Number(right)) => {
                (left.is_nan() && right.is_nan()) || left == right
            }
            _ => same_primitive_or_reference(left, right),
        }
    }
}

/// Compares non-number primitives by value and reference values by pointer.
fn same_primitive_or_reference(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => left == right,
        (Value::BigInt(left), Value::BigInt(right)) => left == right,
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Symbol(left), Value::Symbol(right)) => Rc::ptr_eq(left, right),
        (Value::Date(left), Value::Date(right)) => Rc::ptr_eq(left, right),
        (Value::RegExp(left), Value::RegExp(right)) => Rc::ptr_eq(left, right),
        (Value::Array(left), Value::Array(right)) => Rc::ptr_eq(left, right),
        (Value::Map(left), Value::Map(right)) => Rc::ptr_eq(left, right),
        (Value::Set(left), Value::Set(right)) => Rc::ptr_eq(left, right),
        (Value::Record(left), Value::Record(right)) => Rc::ptr_eq(left, right),
        (Value::Function(left), Value::Function(right)) => Rc::ptr_eq(left, right),
        (Value::Instance(left), Value::Instance(right)) => Rc::ptr_eq(left, right),
        _ => false,
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Rc::new(items))
    }
}

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        Self::RegExp(Rc::new(pattern))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

// ============================================================================
// SECTION: Symbols
// ============================================================================

/// Payload of a symbol value.
#[derive(Debug)]
pub struct SymbolValue {
    /// Optional human-readable description.
    description: Option<String>,
}

impl SymbolValue {
    /// Returns the symbol description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

// ============================================================================
// SECTION: Dates
// ============================================================================

/// Payload of a date value; an invalid date carries no instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    /// The represented instant, or `None` for an invalid date.
    instant: Option<OffsetDateTime>,
}

impl DateValue {
    /// Builds a date from epoch milliseconds.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        let nanos = i128::from(millis) * NANOS_PER_MILLI;
        Self {
            instant: OffsetDateTime::from_unix_timestamp_nanos(nanos).ok(),
        }
    }

    /// Parses an RFC 3339 timestamp; failures produce an invalid date.
    #[must_use]
    pub fn parse_rfc3339(text: &str) -> Self {
        Self {
            instant: OffsetDateTime::parse(text, &Rfc3339).ok(),
        }
    }

    /// Returns the instant, if the date is valid.
    #[must_use]
    pub const fn instant(&self) -> Option<OffsetDateTime> {
        self.instant
    }

    /// Returns the instant as epoch milliseconds, if the date is valid.
    #[must_use]
    pub fn epoch_millis(&self) -> Option<i128> {
        self.instant.map(|instant| instant.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI))
    }

    /// Renders the instant as RFC 3339, if the date is valid.
    #[must_use]
    pub fn to_rfc3339(&self) -> Option<String> {
        self.instant.and_then(|instant| instant.format(&Rfc3339).ok())
    }
}

// ============================================================================
// SECTION: Patterns
// ============================================================================

/// Errors raised while building a [`Pattern`].
#[derive(Debug, Error)]
pub enum PatternError {
    /// A flag outside the supported set was supplied.
    #[error("invalid regular expression flag: {0}")]
    InvalidFlag(char),
    /// A flag was supplied more than once.
    #[error("duplicate regular expression flag: {0}")]
    DuplicateFlag(char),
    /// The `u` and `v` flags were combined.
    #[error("regular expression flags u and v are mutually exclusive")]
    ConflictingUnicodeFlags,
    /// The source failed to compile.
    #[error("invalid regular expression: {0}")]
    Syntax(#[from] regex::Error),
}

/// Compiled regular expression with its canonical source and flags.
///
/// # Invariants
/// - `flags` holds each supported flag at most once, in canonical order.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Expression source as written.
    source: String,
    /// Canonically ordered flags.
    flags: String,
    /// Compiled matcher honoring the `i`, `m`, and `s` flags.
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern from its source and flags.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for unknown, duplicate, or conflicting flags and for
    /// sources the regex engine rejects.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self, PatternError> {
        let source = source.into();
        let flags = canonical_flags(flags)?;
        let regex = RegexBuilder::new(&source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()?;
        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    /// Returns the expression source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the canonically ordered flags.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns the canonical `/source/flags` serialization.
    ///
    /// Bare `/` outside a character class and raw line terminators are
    /// escaped, so `a/b` and `a\/b` serialize identically.
    #[must_use]
    pub fn canonical(&self) -> String {
        if self.source.is_empty() {
            return format!("/(?:)/{}", self.flags);
        }
        format!("/{}/{}", escape_source(&self.source), self.flags)
    }

    /// Returns whether the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Escapes a pattern source for display between `/` delimiters.
fn escape_source(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    let mut in_class = false;
    let mut chars = source.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                escaped.push(ch);
                match chars.next() {
                    Some(next) => push_escaped_char(&mut escaped, next),
                    None => break,
                }
            }
            '[' => {
                in_class = true;
                escaped.push(ch);
            }
            ']' => {
                in_class = false;
                escaped.push(ch);
            }
            '/' if !in_class => escaped.push_str("\\/"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Pushes the character following a backslash, spelling line terminators.
fn push_escaped_char(escaped: &mut String, ch: char) {
    match ch {
        '\n' => escaped.push('n'),
        '\r' => escaped.push('r'),
        '\u{2028}' => escaped.push_str("u2028"),
        '\u{2029}' => escaped.push_str("u2029"),
        _ => escaped.push(ch),
    }
}

/// Validates flags and returns them in canonical order.
fn canonical_flags(flags: &str) -> Result<String, PatternError> {
    let mut seen = String::new();
    for flag in flags.chars() {
        if !FLAG_ORDER.contains(flag) {
            return Err(PatternError::InvalidFlag(flag));
        }
        if seen.contains(flag) {
            return Err(PatternError::DuplicateFlag(flag));
        }
        seen.push(flag);
    }
    if seen.contains('u') && seen.contains('v') {
        return Err(PatternError::ConflictingUnicodeFlags);
    }
    Ok(FLAG_ORDER.chars().filter(|flag| seen.contains(*flag)).collect())
}

// ============================================================================
// SECTION: Maps and Sets
// ============================================================================

/// Insertion-ordered map keyed by native key equality.
///
/// # Invariants
/// - No two keys are equal under [`Value::same_value_zero`].
#[derive(Debug, Clone, Default)]
pub struct MapValue {
    /// Entries in insertion order.
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts an entry, replacing the value of an existing equal key in place.
    pub fn insert(&mut self, key: Value, value: Value) {
        if let Some(entry) =
            self.entries.iter_mut().find(|(existing, _)| Value::same_value_zero(existing, &key))
        {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| Value::same_value_zero(existing, key))
            .map(|(_, value)| value)
    }

    /// Returns whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Insertion-ordered set keyed by native membership.
///
/// # Invariants
/// - No two elements are equal under [`Value::same_value_zero`].
#[derive(Debug, Clone, Default)]
pub struct SetValue {
    /// Elements in insertion order.
    items: Vec<Value>,
}

impl SetValue {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
        }
    }

    /// Inserts an element; returns false when an equal element already exists.
    pub fn insert(&mut self, item: Value) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns whether an equal element is present.
    #[must_use]
    pub fn contains(&self, item: &Value) -> bool {
        self.items.iter().any(|existing| Value::same_value_zero(existing, item))
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl FromIterator<Value> for SetValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Plain string-keyed record with insertion-ordered fields.
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Own enumerable fields.
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns whether `key` is an own field.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the number of own fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}

// ============================================================================
// SECTION: Opaque Values
// ============================================================================

/// Opaque named callable handle.
#[derive(Debug)]
pub struct FunctionValue {
    /// Function name; empty for anonymous functions.
    name: String,
}

impl FunctionValue {
    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Class handle used to tag instances; identity is by handle.
#[derive(Debug, Clone)]
pub struct Class(Rc<ClassData>);

/// Shared class metadata.
#[derive(Debug)]
struct ClassData {
    /// Class name.
    name: String,
    /// Direct superclass, if any.
    parent: Option<Class>,
}

impl Class {
    /// Declares a root class.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Rc::new(ClassData {
            name: name.into(),
            parent: None,
        }))
    }

    /// Declares a class extending `parent`.
    pub fn extends(name: impl Into<String>, parent: &Self) -> Self {
        Self(Rc::new(ClassData {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the direct superclass.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.0.parent.as_ref()
    }

    /// Returns whether both handles denote the same class.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns whether this class is `ancestor` or inherits from it.
    #[must_use]
    pub fn inherits_from(&self, ancestor: &Self) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.is(ancestor) {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

/// Opaque class instance with own fields.
#[derive(Debug)]
pub struct Instance {
    /// Constructing class.
    class: Class,
    /// Own enumerable fields.
    fields: IndexMap<String, Value>,
}

impl Instance {
    /// Returns the constructing class.
    #[must_use]
    pub const fn class(&self) -> &Class {
        &self.class
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns whether `key` is an own field.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the number of own fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the instance has no own fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates own fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::*;

    #[test]
    fn same_value_distinguishes_signed_zero() {
        assert!(!Value::same_value(&Value::from(0.0), &Value::from(-0.0)));
        assert!(Value::same_value_zero(&Value::from(0.0), &Value::from(-0.0)));
        assert!(Value::same_value(&Value::from(f64::NAN), &Value::from(f64::NAN)));
    }

    #[test]
    fn clones_share_identity() {
        let array = Value::array(vec![Value::from(1)]);
        assert!(Value::same_value(&array, &array.clone()));
        assert!(!Value::same_value(&array, &Value::array(vec![Value::from(1)])));
    }

    #[test]
    fn map_insert_replaces_equal_keys() {
        let map: MapValue = vec![
            (Value::from(0.0), Value::from("first")),
            (Value::from(-0.0), Value::from("second")),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 1);
        assert!(matches!(map.get(&Value::from(0)), Some(Value::String(text)) if text == "second"));
    }

    #[test]
    fn set_drops_duplicates_and_keeps_order() {
        let set: SetValue =
            vec![Value::from(2), Value::from(f64::NAN), Value::from(2), Value::from(f64::NAN)]
                .into_iter()
                .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Value::from(f64::NAN)));
        assert!(matches!(set.iter().next(), Some(Value::Number(number)) if *number == 2.0));
    }

    #[test]
    fn flags_are_canonicalized() {
        let pattern = Pattern::new("x", "ymig").unwrap();
        assert_eq!(pattern.flags(), "gimy");
        assert_eq!(pattern.canonical(), "/x/gimy");
        assert!(matches!(Pattern::new("x", "q"), Err(PatternError::InvalidFlag('q'))));
        assert!(matches!(Pattern::new("x", "ii"), Err(PatternError::DuplicateFlag('i'))));
    }

    #[test]
    fn pattern_flags_change_matching() {
        let insensitive = Pattern::new("abc", "i").unwrap();
        assert!(insensitive.is_match("xABCx"));
        let dot_all = Pattern::new("a.b", "s").unwrap();
        assert!(dot_all.is_match("a\nb"));
        let plain = Pattern::new("a.b", "").unwrap();
        assert!(!plain.is_match("a\nb"));
    }

    #[test]
    fn dates_project_to_epoch_millis() {
        let date = DateValue::from_millis(-1);
        assert_eq!(date.epoch_millis(), Some(-1));
        assert_eq!(DateValue::parse_rfc3339("not a date").epoch_millis(), None);
        assert_eq!(DateValue::from_millis(i64::MAX).epoch_millis(), None);
    }

    #[test]
    fn class_inheritance_walks_parents() {
        let base = Class::new("Base");
        let middle = Class::extends("Middle", &base);
        let leaf = Class::extends("Leaf", &middle);
        assert!(leaf.inherits_from(&base));
        assert!(!base.inherits_from(&leaf));
        assert!(!Class::new("Base").is(&base));
    }

    #[test]
    fn truthiness_matches_falsy_set() {
        assert!(!Value::bigint(0).is_truthy());
        assert!(Value::record(Vec::<(&str, Value)>::new()).is_truthy());
        assert!(!Value::from(-0.0).is_truthy());
    }
}
