/// Outcome of a fallible operation: exactly one of a failure or a success.
///
/// Network fallibility is carried in every signature above the transport with
/// this type. Consumers are expected to eliminate it with [`Either::resolve`];
/// the accessors [`Either::value`] and [`Either::error`] treat a wrong-branch
/// access as a defect in the caller and panic.
#[derive(Debug, Clone, PartialEq)]
pub enum Either<E, A> {
    Failure(E),
    Success(A),
}

impl<E, A> Either<E, A> {
    pub fn success(value: A) -> Self {
        Either::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Either::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Either::Success(_))
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics when called on a failure.
    #[track_caller]
    pub fn value(&self) -> &A {
        match self {
            Either::Success(value) => value,
            Either::Failure(_) => {
                panic!("This instance of Either is a failure. Cannot return value.")
            }
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    /// Panics when called on a success.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Either::Failure(error) => error,
            Either::Success(_) => {
                panic!("This instance of Either is a success. Cannot return error.")
            }
        }
    }

    /// Owning variant of [`Either::value`].
    ///
    /// # Panics
    /// Panics when called on a failure.
    #[track_caller]
    pub fn into_value(self) -> A {
        match self {
            Either::Success(value) => value,
            Either::Failure(_) => {
                panic!("This instance of Either is a failure. Cannot return value.")
            }
        }
    }

    /// Owning variant of [`Either::error`].
    ///
    /// # Panics
    /// Panics when called on a success.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Either::Failure(error) => error,
            Either::Success(_) => {
                panic!("This instance of Either is a success. Cannot return error.")
            }
        }
    }

    /// Invokes exactly one handler, chosen by variant, and returns its result.
    pub fn resolve<B>(self, on_failure: impl FnOnce(E) -> B, on_success: impl FnOnce(A) -> B) -> B {
        match self {
            Either::Failure(error) => on_failure(error),
            Either::Success(value) => on_success(value),
        }
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Either<E, B> {
        self.resolve(Either::failure, |value| Either::success(f(value)))
    }

    pub fn into_result(self) -> Result<A, E> {
        self.resolve(Err, Ok)
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Either::Success(value),
            Err(error) => Either::Failure(error),
        }
    }
}
