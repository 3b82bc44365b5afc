use rug::Integer;

pub trait Eval<T> {
    type Output;

    fn eval(&self, pt: &T) -> Self::Output;
}

// custom Zero trait that doesn't require Add
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

impl Zero for Integer {
    fn zero() -> Self {
        Integer::new()
    }

    fn is_zero(&self) -> bool {
        self.cmp0().is_eq()
    }
}

// custom One trait that doesn't require Mul
pub trait One {
    fn one() -> Self;
    fn is_one(&self) -> bool;
}

impl One for Integer {
    fn one() -> Self {
        Integer::from(1)
    }

    fn is_one(&self) -> bool {
        *self == 1
    }
}
