mod identifier;
mod literal;
mod operator;
mod whitespace;

pub use identifier::*;
pub use literal::*;
pub use operator::*;
pub use whitespace::*;
