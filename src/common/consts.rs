//! Static constants.

use astro_float_num::BigFloat;
use astro_float_num::WORD_BIT_SIZE;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: BigFloat = BigFloat::from_word(1, WORD_BIT_SIZE);

    /// 2
    pub(crate) static ref TWO: BigFloat = BigFloat::from_word(2, WORD_BIT_SIZE);
}
