use std::cmp::min;

use num_traits::PrimInt;

pub(crate) trait RemFloor: Sized {
    /// Remainder whose sign follows the divisor, so `-1.rem_floor(7) == 6`.
    fn rem_floor(&self, other: Self) -> Self;
}

impl<T: PrimInt> RemFloor for T {
    fn rem_floor(&self, other: Self) -> Self {
        let zero = Self::zero();
        let one = Self::one();
        if *self > zero && other < zero {
            (*self - one) % other + other + one
        } else if *self < zero && other > zero {
            (*self + one) % other + other - one
        } else {
            *self % other
        }
    }
}

pub(crate) trait ClampedDivRem<Q: Ord>: Sized {
    type Quotient;
    /// Division where the quotient saturates at `max_quotient` and whatever is left over
    /// stays in the remainder. Used to absorb the leap day at the end of a calendar period.
    fn clamped_div_rem(self, divisor: Self, max_quotient: Q) -> (Q, Self);
}

impl<T, Q> ClampedDivRem<Q> for T
where
    T: PrimInt + TryInto<Q>,
    Q: Ord + Into<T> + Copy,
{
    type Quotient = Q;
    fn clamped_div_rem(self, divisor: T, max_quotient: Self::Quotient) -> (Self::Quotient, Self) {
        let quotient = min(self / divisor, max_quotient.into());
        let remainder = self - quotient * divisor;
        match quotient.try_into() {
            Ok(quotient) => (quotient, remainder),
            Err(_) => unreachable!("quotient is bounded by max_quotient"),
        }
    }
}
