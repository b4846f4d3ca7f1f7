mod common;
mod compare_asin_test;
mod compare_special_test;
