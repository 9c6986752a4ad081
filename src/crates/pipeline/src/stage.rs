//! A single composable transformation slot.
//!
//! A `Pipeline<T>` holds one boxed `T -> T` function. Composing a new stage
//! replaces that function with a closure wrapping the previous one, so
//! applying a pipeline costs one indirect call per stage no matter how it was
//! built, and nothing is evaluated until [`Pipeline::apply`] is called.

use std::fmt;

type StageFn<T> = Box<dyn Fn(T) -> T>;

fn identity<T>(value: T) -> T {
    value
}

/// A composed unary function `T -> T`, identity by default.
pub struct Pipeline<T> {
    func: StageFn<T>,
    /// Stages composed since construction or the last reset.
    stages: usize,
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: 'static> Pipeline<T> {
    pub fn identity() -> Self {
        Self {
            func: Box::new(identity::<T>),
            stages: 0,
        }
    }

    /// Compose `f` after the current pipeline: `t -> f(current(t))`.
    ///
    /// `f` is stored, not called.
    pub fn then<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + 'static,
    {
        if self.stages == 0 {
            // identity is replaced, not wrapped
            self.func = Box::new(f);
        } else {
            let prev = std::mem::replace(&mut self.func, Box::new(identity::<T>));
            self.func = Box::new(move |value| f(prev(value)));
        }
        self.stages += 1;
    }

    /// Drop every composed stage and go back to identity.
    pub fn reset(&mut self) {
        self.func = Box::new(identity::<T>);
        self.stages = 0;
    }

}

impl<T> Pipeline<T> {
    pub fn apply(&self, value: T) -> T {
        (self.func)(value)
    }

    pub fn stages(&self) -> usize {
        self.stages
    }

    pub fn is_identity(&self) -> bool {
        self.stages == 0
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("type", &std::any::type_name::<T>())
            .field("stages", &self.stages)
            .finish()
    }
}
