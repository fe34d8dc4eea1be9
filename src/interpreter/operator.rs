use std::{collections::HashMap, fmt, sync::OnceLock};

use crate::error::ParseError;

/// The arithmetic operation an operator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// Bitwise exclusive-or of two integral values.
    Xor,
    /// `a` raised to the power `b`. Not part of the standard table.
    Power,
}

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// An operator as found in the token stream.
///
/// Operators are only ever produced by [`OperatorTable::lookup`], so the
/// precedence and associativity always match the table they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    /// The spelling the operator was registered under.
    pub spelling:      &'static str,
    /// The operation performed at evaluation time.
    pub kind:          OperatorKind,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Tie-break rule between operators of equal precedence.
    pub associativity: Associativity,
}

impl Operator {
    /// Returns `true` if `self`, waiting on the operator stack, has to be
    /// emitted before `incoming` is pushed.
    ///
    /// # Example
    /// ```
    /// use shunting_yard::interpreter::operator::OperatorTable;
    ///
    /// let table = OperatorTable::standard();
    /// let plus = table.lookup("+", 0).unwrap();
    /// let minus = table.lookup("-", 0).unwrap();
    /// let times = table.lookup("*", 0).unwrap();
    ///
    /// assert!(times.yields_to(&plus));
    /// assert!(plus.yields_to(&minus));
    /// assert!(!plus.yields_to(&times));
    /// ```
    #[must_use]
    pub fn yields_to(&self, incoming: &Self) -> bool {
        self.precedence > incoming.precedence
        || (self.precedence == incoming.precedence && self.associativity == Associativity::Left)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling)
    }
}

/// Immutable registry mapping operator spellings to their definitions.
///
/// The table is the single source of truth for precedence and
/// associativity; the tokenizer and converter never hard-code either.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: HashMap<&'static str, Operator>,
}

impl OperatorTable {
    /// Builds the default rule set.
    ///
    /// | Spelling | Kind | Precedence |
    /// |---|---|---|
    /// | `+` `-` | additive | 1 |
    /// | `*` `/` | multiplicative | 2 |
    /// | `xor` | bitwise | 3 |
    ///
    /// `xor` binds tighter than the arithmetic operators. All operators are
    /// left-associative.
    #[must_use]
    pub fn standard() -> Self {
        use Associativity::Left;
        use OperatorKind::{Add, Divide, Multiply, Subtract, Xor};

        Self::builder().operator("+", Add, 1, Left)
                       .operator("-", Subtract, 1, Left)
                       .operator("*", Multiply, 2, Left)
                       .operator("/", Divide, 2, Left)
                       .operator("xor", Xor, 3, Left)
                       .build()
    }

    /// Returns the process-wide standard table.
    ///
    /// The table is built on first use and is read-only afterwards.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<OperatorTable> = OnceLock::new();
        GLOBAL.get_or_init(Self::standard)
    }

    /// Starts an empty table.
    #[must_use]
    pub fn builder() -> OperatorTableBuilder {
        OperatorTableBuilder::default()
    }

    /// Looks up an operator by spelling.
    ///
    /// # Errors
    /// Returns [`ParseError::UnknownOperator`] if the spelling is not in the
    /// table.
    ///
    /// # Example
    /// ```
    /// use shunting_yard::{
    ///     error::ParseError,
    ///     interpreter::operator::{Associativity, OperatorKind, OperatorTable},
    /// };
    ///
    /// let table = OperatorTable::standard();
    /// let xor = table.lookup("xor", 2).unwrap();
    /// assert_eq!(xor.kind, OperatorKind::Xor);
    /// assert_eq!(xor.precedence, 3);
    /// assert_eq!(xor.associativity, Associativity::Left);
    ///
    /// let err = table.lookup("^", 4).unwrap_err();
    /// assert!(matches!(err, ParseError::UnknownOperator { position: 4, .. }));
    /// ```
    pub fn lookup(&self, spelling: &str, position: usize) -> Result<Operator, ParseError> {
        self.entries
            .get(spelling)
            .copied()
            .ok_or_else(|| ParseError::UnknownOperator { spelling: spelling.to_string(),
                                                         position })
    }

    /// Returns `true` if `spelling` is a registered operator.
    #[must_use]
    pub fn contains(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects operator definitions into an [`OperatorTable`].
///
/// # Example
/// ```
/// use shunting_yard::interpreter::operator::{Associativity, OperatorKind, OperatorTable};
///
/// let table = OperatorTable::builder().operator("+", OperatorKind::Add, 1, Associativity::Left)
///                                     .operator("^", OperatorKind::Power, 4, Associativity::Right)
///                                     .build();
///
/// assert!(table.contains("^"));
/// assert!(!table.contains("*"));
/// ```
#[derive(Debug, Default)]
pub struct OperatorTableBuilder {
    entries: HashMap<&'static str, Operator>,
}

impl OperatorTableBuilder {
    /// Registers an operator. A later registration of the same spelling
    /// replaces the earlier one.
    #[must_use]
    pub fn operator(mut self,
                    spelling: &'static str,
                    kind: OperatorKind,
                    precedence: u8,
                    associativity: Associativity)
                    -> Self {
        self.entries.insert(spelling,
                            Operator { spelling,
                                       kind,
                                       precedence,
                                       associativity });
        self
    }

    /// Freezes the definitions.
    #[must_use]
    pub fn build(self) -> OperatorTable {
        OperatorTable { entries: self.entries }
    }
}
