pub mod func;
pub mod op;
