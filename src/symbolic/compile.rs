use super::{Expr, Symbol};
use crate::{Error, Result};

/// Holds a node of the numeric evaluation tree
#[derive(Clone, Debug)]
enum Node {
    Const(f64),
    Arg(usize),
    Add(Vec<Node>),
    Mul(Vec<Node>),
    Powi(Box<Node>, i32),
    Powf(Box<Node>, f64),
}

impl Node {
    fn build(expr: &Expr, args: &[Symbol]) -> Result<Node> {
        let node = match expr {
            Expr::Num(r) => Node::Const(r.to_f64()),
            Expr::Sym(s) => match args.iter().position(|a| a == s) {
                Some(index) => Node::Arg(index),
                None => return Err(Error::UnboundSymbol(s.name().to_string())),
            },
            Expr::Add(terms) => Node::Add(terms.iter().map(|t| Node::build(t, args)).collect::<Result<_>>()?),
            Expr::Mul(factors) => Node::Mul(factors.iter().map(|f| Node::build(f, args)).collect::<Result<_>>()?),
            Expr::Pow(base, e) => {
                let base = Box::new(Node::build(base, args)?);
                match e.to_integer().and_then(|n| i32::try_from(n).ok()) {
                    Some(n) => Node::Powi(base, n),
                    None => Node::Powf(base, e.to_f64()),
                }
            }
        };
        Ok(node)
    }

    fn eval(&self, x: &[f64]) -> f64 {
        match self {
            Node::Const(v) => *v,
            Node::Arg(i) => x[*i],
            Node::Add(terms) => terms.iter().map(|t| t.eval(x)).sum(),
            Node::Mul(factors) => factors.iter().map(|f| f.eval(x)).product(),
            Node::Powi(base, n) => f64::powi(base.eval(x), *n),
            Node::Powf(base, e) => f64::powf(base.eval(x), *e),
        }
    }
}

/// Implements a numeric function compiled from a symbolic expression
///
/// The arguments are positional and follow the symbol ordering given to [CompiledFunction::new].
#[derive(Clone, Debug)]
pub struct CompiledFunction {
    root: Node,
    args: Vec<Symbol>,
}

impl CompiledFunction {
    /// Compiles an expression
    ///
    /// # Input
    ///
    /// * `expr` -- the expression; all of its symbols must be listed in `args`
    /// * `args` -- the ordered argument symbols (unused symbols are allowed)
    pub fn new(expr: &Expr, args: &[Symbol]) -> Result<Self> {
        Ok(CompiledFunction {
            root: Node::build(expr, args)?,
            args: args.to_vec(),
        })
    }

    /// Returns the number of arguments
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Returns the ordered argument symbols
    pub fn args(&self) -> &[Symbol] {
        &self.args
    }

    /// Evaluates the function
    pub fn call(&self, x: &[f64]) -> Result<f64> {
        if x.len() != self.args.len() {
            return Err(Error::InvalidParameterCount {
                expected: self.args.len(),
                found: x.len(),
            });
        }
        Ok(self.root.eval(x))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
