use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    Add,
    Sub,
}

impl BinaryOperation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperation::Add),
            "-" => Some(BinaryOperation::Sub),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
        }
    }

    /// apply the operation with 32-bit two's complement wrapping
    pub fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            BinaryOperation::Add => lhs.wrapping_add(rhs),
            BinaryOperation::Sub => lhs.wrapping_sub(rhs),
        }
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Immutable expression tree, built bottom-up by the parser
///
/// A `Binary` node exclusively owns both of its operands. A left-fold chain nests as deep as it
/// has operators, so every walk over the tree keeps its own stack on the heap instead of
/// recursing.
pub enum Expr {
    Literal(i32),
    Binary {
        op: BinaryOperation,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// Pending work for a post-order walk
enum Step<'a> {
    Visit(&'a Expr),
    Apply(BinaryOperation),
}

impl Expr {
    pub fn binary(op: BinaryOperation, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// reduce the tree to a single integer
    ///
    /// pure, the same tree always evaluates to the same value
    pub fn evaluate(&self) -> i32 {
        let mut steps = vec![Step::Visit(self)];
        let mut values: Vec<i32> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Literal(n)) => values.push(*n),
                Step::Visit(Expr::Binary { op, lhs, rhs }) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(rhs));
                    steps.push(Step::Visit(lhs));
                }
                Step::Apply(op) => match (values.pop(), values.pop()) {
                    (Some(rhs), Some(lhs)) => values.push(op.apply(lhs, rhs)),
                    _ => unreachable!("both operands are visited before their operation"),
                },
            }
        }

        match values.as_slice() {
            [value] => *value,
            _ => unreachable!("a tree reduces to exactly one value"),
        }
    }
}

pub fn evaluate(expr: &Expr) -> i32 {
    expr.evaluate()
}

impl Drop for Expr {
    /// unlink nested operands into a worklist so dropping a deep tree doesn't recurse
    fn drop(&mut self) {
        fn detach(expr: &mut Expr, pending: &mut Vec<Expr>) {
            if let Expr::Binary { lhs, rhs, .. } = expr {
                for child in [lhs, rhs] {
                    if matches!(**child, Expr::Binary { .. }) {
                        pending.push(std::mem::replace(&mut **child, Expr::Literal(0)));
                    }
                }
            }
        }

        let mut pending: Vec<Expr> = Vec::new();
        detach(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            // children are detached first, so `expr` drops with only literals below it
            detach(&mut expr, &mut pending);
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];

        while let Some(pair) = pairs.pop() {
            match pair {
                (Expr::Literal(a), Expr::Literal(b)) if a == b => {}
                (
                    Expr::Binary { op: a, lhs: al, rhs: ar },
                    Expr::Binary { op: b, lhs: bl, rhs: br },
                ) if a == b => {
                    pairs.push((ar.as_ref(), br.as_ref()));
                    pairs.push((al.as_ref(), bl.as_ref()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Expr {}

/// literals are rendered bare, binary nodes fully parenthesised: `((10 + 2) - 5)`
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Op(BinaryOperation),
            Close,
        }

        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Expr::Literal(n)) => write!(f, "{n}")?,
                Piece::Node(Expr::Binary { op, lhs, rhs }) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(rhs));
                    pieces.push(Piece::Op(*op));
                    pieces.push(Piece::Node(lhs));
                }
                Piece::Op(op) => write!(f, " {op} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({self})")
    }
}
