/// Integer-like element types with a finite range, a unit step between
/// neighbouring values and overflow-checked addition.
///
/// [`Tree::is_bst`](crate::Tree::is_bst) starts from the full range
/// `MIN..=MAX` and bounds every subtree one step past its parent's value.
/// [`Tree::has_path_with_sum`](crate::Tree::has_path_with_sum) adds up paths
/// with [`checked_plus`](Stepped::checked_plus).
pub trait Stepped: Ord + Copy {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;

    /// The value one step below `self`, or `None` at `MIN`.
    fn pred(self) -> Option<Self>;

    /// The value one step above `self`, or `None` at `MAX`.
    fn succ(self) -> Option<Self>;

    /// `self + other`, or `None` when the sum is out of range.
    fn checked_plus(self, other: Self) -> Option<Self>;
}

macro_rules! impl_stepped {
    ($($t:ty),*) => {
        $(
            impl Stepped for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn pred(self) -> Option<Self> {
                    self.checked_sub(1)
                }

                fn succ(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn checked_plus(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

impl_stepped!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
