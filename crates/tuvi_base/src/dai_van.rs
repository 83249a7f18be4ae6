//! Đại Vận: ten-year life periods assigned to the twelve houses.

use crate::can_chi::{ALL_BRANCHES, Branch};
use crate::direction::RingDirection;

/// Starting age of the decade governed by each branch, indexed Tý..Hợi.
///
/// Walking `direction` from Mệnh, the house at step `i` starts at
/// `stride + 10 * i`.
pub fn decade_start_ages(menh: Branch, stride: u8, direction: RingDirection) -> [u8; 12] {
    let mut ages = [0u8; 12];
    for step in 0..12u8 {
        let branch = menh.offset(direction.sign() * step as i32);
        ages[branch.index() as usize] = stride + 10 * step;
    }
    ages
}

/// Branch whose decade covers `age`, or `None` before the first decade.
pub fn branch_for_age(
    menh: Branch,
    stride: u8,
    direction: RingDirection,
    age: u32,
) -> Option<Branch> {
    let ages = decade_start_ages(menh, stride, direction);
    ALL_BRANCHES
        .into_iter()
        .filter(|b| u32::from(ages[b.index() as usize]) <= age)
        .max_by_key(|b| ages[b.index() as usize])
}
