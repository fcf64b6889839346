//! Canonical line numbers of [`super::REFERENCE_LISTING`]

pub const FUNCTION_START: usize = 1;
pub const CREATE_MAP: usize = 2;
pub const FOR_LOOP: usize = 3;
pub const CALC_COMPLEMENT: usize = 4;
pub const CHECK_MAP: usize = 5;
pub const RETURN_RESULT: usize = 6;
pub const END_IF: usize = 7;
pub const PUT_MAP: usize = 8;
pub const END_FOR: usize = 9;
pub const RETURN_EMPTY: usize = 10;
pub const FUNCTION_END: usize = 11;
