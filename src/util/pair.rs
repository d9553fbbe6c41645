/// Display context: a value together with the table needed to print it.
pub struct Pair<A, B>(pub A, pub B);
