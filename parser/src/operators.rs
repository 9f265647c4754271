//! Operators and their precedence. Higher binds tighter

use crate::JSToken;

pub const ASSIGNMENT_PRECEDENCE: u8 = 2;
pub const LOGICAL_OR_PRECEDENCE: u8 = 3;
pub const LOGICAL_AND_PRECEDENCE: u8 = 4;
pub const EQUALITY_PRECEDENCE: u8 = 8;
pub const RELATION_PRECEDENCE: u8 = 9;
pub const ADDITIVE_PRECEDENCE: u8 = 11;
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 12;
pub const UNARY_PRECEDENCE: u8 = 14;
pub const MEMBER_ACCESS_PRECEDENCE: u8 = 17;
pub const PRIMARY_PRECEDENCE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	LogicalOr,
	LogicalAnd,
	Equal,
	NotEqual,
	StrictEqual,
	StrictNotEqual,
	LessThan,
	GreaterThan,
	LessThanEqual,
	GreaterThanEqual,
	Add,
	Subtract,
	Multiply,
	Divide,
}

impl BinaryOperator {
	#[must_use]
	pub fn from_token(token: &JSToken) -> Option<Self> {
		Some(match token {
			JSToken::LogicalOr => Self::LogicalOr,
			JSToken::LogicalAnd => Self::LogicalAnd,
			JSToken::Equal => Self::Equal,
			JSToken::NotEqual => Self::NotEqual,
			JSToken::StrictEqual => Self::StrictEqual,
			JSToken::StrictNotEqual => Self::StrictNotEqual,
			JSToken::LessThan => Self::LessThan,
			JSToken::GreaterThan => Self::GreaterThan,
			JSToken::LessThanEqual => Self::LessThanEqual,
			JSToken::GreaterThanEqual => Self::GreaterThanEqual,
			JSToken::Add => Self::Add,
			JSToken::Subtract => Self::Subtract,
			JSToken::Multiply => Self::Multiply,
			JSToken::Divide => Self::Divide,
			_ => return None,
		})
	}

	#[must_use]
	pub fn precedence(self) -> u8 {
		match self {
			Self::LogicalOr => LOGICAL_OR_PRECEDENCE,
			Self::LogicalAnd => LOGICAL_AND_PRECEDENCE,
			Self::Equal | Self::NotEqual | Self::StrictEqual | Self::StrictNotEqual => {
				EQUALITY_PRECEDENCE
			}
			Self::LessThan | Self::GreaterThan | Self::LessThanEqual | Self::GreaterThanEqual => {
				RELATION_PRECEDENCE
			}
			Self::Add | Self::Subtract => ADDITIVE_PRECEDENCE,
			Self::Multiply | Self::Divide => MULTIPLICATIVE_PRECEDENCE,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::LogicalOr => "||",
			Self::LogicalAnd => "&&",
			Self::Equal => "==",
			Self::NotEqual => "!=",
			Self::StrictEqual => "===",
			Self::StrictNotEqual => "!==",
			Self::LessThan => "<",
			Self::GreaterThan => ">",
			Self::LessThanEqual => "<=",
			Self::GreaterThanEqual => ">=",
			Self::Add => "+",
			Self::Subtract => "-",
			Self::Multiply => "*",
			Self::Divide => "/",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
	LogicalNot,
	Negative,
	Plus,
	TypeOf,
	Void,
}

impl UnaryOperator {
	#[must_use]
	pub fn from_token(token: &JSToken) -> Option<Self> {
		Some(match token {
			JSToken::LogicalNot => Self::LogicalNot,
			JSToken::Subtract => Self::Negative,
			JSToken::Add => Self::Plus,
			JSToken::Keyword(crate::JSKeyword::Typeof) => Self::TypeOf,
			JSToken::Keyword(crate::JSKeyword::Void) => Self::Void,
			_ => return None,
		})
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::LogicalNot => "!",
			Self::Negative => "-",
			Self::Plus => "+",
			Self::TypeOf => "typeof",
			Self::Void => "void",
		}
	}

	/// Keyword operators need a space before their operand
	#[must_use]
	pub fn is_keyword(self) -> bool {
		matches!(self, Self::TypeOf | Self::Void)
	}
}
