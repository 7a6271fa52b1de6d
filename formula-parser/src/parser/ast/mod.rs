pub mod binary;
pub mod call;
pub mod node;
pub mod number;
pub mod variable;

pub use binary::Binary;
pub use call::Call;
pub use node::Node;
pub use number::Number;
pub use variable::Variable;
