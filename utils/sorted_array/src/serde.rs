use serde::ser::SerializeSeq;
use serde::Serialize;

use crate::SortedArray;

impl<K, const N: usize> Serialize for SortedArray<K, N>
where
    K: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(N))?;
        for key in self.iter() {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}
