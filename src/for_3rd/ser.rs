//! Serialization of BigComplex.
//! The parts are serialized the way `BigFloat` serializes itself, along with their precision.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::num::BigComplex;

impl Serialize for BigComplex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (p_re, p_im) = self.precision();

        let mut st = serializer.serialize_struct("BigComplex", 4)?;
        st.serialize_field("re", self.re())?;
        st.serialize_field("im", self.im())?;
        st.serialize_field("p_re", &p_re)?;
        st.serialize_field("p_im", &p_im)?;
        st.end()
    }
}
