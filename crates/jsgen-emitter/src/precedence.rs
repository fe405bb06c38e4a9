//! Operator precedence table.
//!
//! Levels form a total order from `Sequence` (comma, loosest) to `Primary`
//! (identifiers and literals, tightest). A child rendered where its parent
//! demands a level above the child's own must be parenthesized.

/// Binding level of an expression position or operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precedence {
    Sequence = 0,
    Assignment = 1,
    Conditional = 2,
    LogicalOR = 3,
    LogicalAND = 4,
    BitwiseOR = 5,
    BitwiseXOR = 6,
    BitwiseAND = 7,
    Equality = 8,
    Relational = 9,
    BitwiseSHIFT = 10,
    Additive = 11,
    Multiplicative = 12,
    Unary = 13,
    Postfix = 14,
    Call = 15,
    New = 16,
    TaggedTemplate = 17,
    Member = 18,
    Primary = 19,
}

/// Side on which same-level chains group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a = b = c` is `a = (b = c)`
    Right,
}

impl Precedence {
    pub const YIELD: Self = Self::Assignment;
    pub const AWAIT: Self = Self::Assignment;
    pub const ARROW_FUNCTION: Self = Self::Conditional;

    /// Numeric level, `0` for `Sequence` up to `19` for `Primary`.
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// The next tighter level; `Primary` is its own successor.
    pub const fn tighter(self) -> Self {
        match self {
            Self::Sequence => Self::Assignment,
            Self::Assignment => Self::Conditional,
            Self::Conditional => Self::LogicalOR,
            Self::LogicalOR => Self::LogicalAND,
            Self::LogicalAND => Self::BitwiseOR,
            Self::BitwiseOR => Self::BitwiseXOR,
            Self::BitwiseXOR => Self::BitwiseAND,
            Self::BitwiseAND => Self::Equality,
            Self::Equality => Self::Relational,
            Self::Relational => Self::BitwiseSHIFT,
            Self::BitwiseSHIFT => Self::Additive,
            Self::Additive => Self::Multiplicative,
            Self::Multiplicative => Self::Unary,
            Self::Unary => Self::Postfix,
            Self::Postfix => Self::Call,
            Self::Call => Self::New,
            Self::New => Self::TaggedTemplate,
            Self::TaggedTemplate => Self::Member,
            Self::Member | Self::Primary => Self::Primary,
        }
    }

    /// Parenthesization rule: an expression of this level placed where
    /// `context` is required needs parentheses iff it binds strictly looser.
    /// Equal levels never do.
    pub fn needs_parens_in(self, context: Self) -> bool {
        self < context
    }

    /// Contexts for the two operands of a binary operator at this level.
    ///
    /// The operand on the associative side is rendered at the operator's own
    /// level, the other one level tighter, so `a - (b - c)` keeps its
    /// parentheses while `(a - b) - c` loses them.
    pub const fn operand_contexts(self, associativity: Associativity) -> (Self, Self) {
        match associativity {
            Associativity::Left => (self, self.tighter()),
            Associativity::Right => (self.tighter(), self),
        }
    }
}

/// Precedence of a binary or logical operator, or `None` if the table has no
/// entry for it.
pub fn binary_precedence(operator: &str) -> Option<Precedence> {
    let precedence = match operator {
        "||" => Precedence::LogicalOR,
        "&&" => Precedence::LogicalAND,
        "|" => Precedence::BitwiseOR,
        "^" => Precedence::BitwiseXOR,
        "&" => Precedence::BitwiseAND,
        "==" | "!=" | "===" | "!==" => Precedence::Equality,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => Precedence::Relational,
        "<<" | ">>" | ">>>" => Precedence::BitwiseSHIFT,
        "+" | "-" => Precedence::Additive,
        "*" | "/" | "%" => Precedence::Multiplicative,
        _ => return None,
    };
    Some(precedence)
}

/// Table entry for a binary or logical operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: Precedence,
    pub associativity: Associativity,
}

/// Full table entry for `operator`. Every operator in the table groups to
/// the left.
pub fn binary_operator(operator: &str) -> Option<OperatorInfo> {
    binary_precedence(operator).map(|precedence| OperatorInfo {
        precedence,
        associativity: Associativity::Left,
    })
}

/// Operators accepted by an `AssignmentExpression`.
pub fn is_assignment_operator(operator: &str) -> bool {
    matches!(
        operator,
        "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "**=" | "<<=" | ">>=" | ">>>=" | "|=" | "^="
            | "&=" | "||=" | "&&=" | "??="
    )
}
