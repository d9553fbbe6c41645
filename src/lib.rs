pub mod clause;
pub mod io;
pub mod knowledge;
pub mod literal;
pub mod options;
pub mod prelude;
pub mod record;
pub mod redundancy;
pub mod resolution;
pub mod search;
pub mod statistics;
pub mod symbol;
pub mod util;
