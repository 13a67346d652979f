//! The AST produced by the parser.
//!
//! Every node owns its children outright (`Box`, `Vec`, `Option`); there is
//! no sharing and no cycles, so dropping a `Program` drops the whole tree
//! for free. Every node carries the source line of the first token that
//! introduced it.

use rin_util::Symbol;

/// The root of a parsed source file: an ordered sequence of top-level
/// statements. Nothing restricts what may appear at the top level beyond
/// what `Stmt` allows — `Program` accepts any statement, not only function
/// declarations, matching the reference this grammar was distilled from.
#[derive(Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq)]
pub enum Stmt {
    FnDecl(FnDecl),
    Let(LetStmt),
    Return(ReturnStmt),
    While(WhileStmt),
    If(IfStmt),
    Block(Block),
    Expr(ExprStmt),
}

impl Stmt {
    pub fn line(&self) -> u32 {
        match self {
            Stmt::FnDecl(n) => n.line,
            Stmt::Let(n) => n.line,
            Stmt::Return(n) => n.line,
            Stmt::While(n) => n.line,
            Stmt::If(n) => n.line,
            Stmt::Block(n) => n.line,
            Stmt::Expr(n) => n.line,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct FnDecl {
    pub name: Symbol,
    pub params: Vec<Param>,
    pub body: Block,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct Param {
    pub name: Symbol,
    pub type_name: Symbol,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct LetStmt {
    pub is_mut: bool,
    pub name: Symbol,
    pub type_name: Option<Symbol>,
    pub init: Expr,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Block,
    pub else_branch: Option<ElseBranch>,
    pub line: u32,
}

/// The else arm of an `if`: either a plain block, or (for `else if`) a
/// nested `IfStmt`, never anything else.
#[derive(Debug, PartialEq)]
pub enum ElseBranch {
    Block(Block),
    If(Box<IfStmt>),
}

#[derive(Debug, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub enum Expr {
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Call(CallExpr),
    Ident(IdentExpr),
    Number(NumberLiteral),
    String(StringLiteral),
    /// Stands in for a primary expression that could not be parsed (an
    /// unexpected token where an expression was expected). Lets every
    /// grammar slot that the grammar itself says is mandatory stay a plain
    /// `Expr` instead of an `Option<Expr>`, while `synchronize` has already
    /// recorded the diagnostic and realigned the token stream by the time
    /// this node is built.
    Error(ErrorExpr),
}

impl Expr {
    pub fn line(&self) -> u32 {
        match self {
            Expr::Assign(n) => n.line,
            Expr::Binary(n) => n.line,
            Expr::Unary(n) => n.line,
            Expr::Call(n) => n.line,
            Expr::Ident(n) => n.line,
            Expr::Number(n) => n.line,
            Expr::String(n) => n.line,
            Expr::Error(n) => n.line,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ErrorExpr {
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct AssignExpr {
    pub target: Symbol,
    pub value: Box<Expr>,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

#[derive(Debug, PartialEq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub line: u32,
}

/// The only unary operator in the grammar. Kept as a unit-variant enum
/// rather than a bare character so "no other unary operator exists" is
/// enforced by the type, not by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
}

#[derive(Debug, PartialEq)]
pub struct UnaryExpr {
    pub op: UnOp,
    pub operand: Box<Expr>,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct CallExpr {
    pub callee: Symbol,
    pub args: Vec<Expr>,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct IdentExpr {
    pub name: Symbol,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct NumberLiteral {
    pub value: String,
    pub line: u32,
}

#[derive(Debug, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub line: u32,
}
