use std::fmt::{Debug, Display};

use trait_set::trait_set;

// Until `trait_alias` is stabilized, we have to use a macro
trait_set! {
    /// Integer key type. Keys widen losslessly into `i128`, which is where all
    /// model arithmetic happens, so fitting never overflows for 64-bit keys.
    pub trait Key = Copy + Ord + Debug + Display + Into<i128> + 'static;
}
