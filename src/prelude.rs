pub use crate::clause::{Clause, Complementary};
pub use crate::knowledge::{KnowledgeBase, KnowledgeBuilder, Origin};
pub use crate::literal::Literal;
pub use crate::record::Record;
pub use crate::symbol::{Symbol, Symbols};
pub use crate::util::block::Block;
pub use crate::util::id::Id;
pub use crate::util::pair::Pair;
