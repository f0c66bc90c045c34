//! Result-handling types/traits/macros.

prelude! {}

#[macro_export]
macro_rules! error {
    ( @invalid($field:expr) $fmt_head:literal $(, $fmt_args:expr)* $(,)? ) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::new_invalid(
                $field,
                format!($fmt_head $(, $fmt_args)*),
            )
        )
    };
    ( @argument($arg:expr) $fmt_head:literal $(, $fmt_args:expr)* $(,)? ) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::new_argument(
                $arg,
                format!($fmt_head $(, $fmt_args)*),
            )
        )
    };
    ( @out_of_range($index:expr, $len:expr) ) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::new_out_of_range($index, $len)
        )
    };
    ( $fmt_head:literal $(, $fmt_args:expr)* $(,)? ) => {
        $crate::prelude::res::Error::from(format!(
            $fmt_head $(, $fmt_args)*
        ))
    };
    ($e:expr) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::from($e)
        )
    };
    ($($unexpected:tt)*) => {
        compile_error!(
            "expected println!-like string interpolation \
            or an expression convertible `Into` an error"
        )
    };
}

#[macro_export]
macro_rules! bail {
    ($($input:tt)+) => {
        return $crate::prelude::Res::Err($crate::error!($($input)+))
    };
}

#[derive(Debug)]
pub enum ErrorSrc {
    Msg(String),
    /// A value was rejected at assignment time.
    Invalid {
        field: String,
        desc: String,
    },
    /// A required argument is absent.
    Argument {
        arg: String,
        desc: String,
    },
    /// Index-based access outside of `[0, len)`.
    OutOfRange {
        index: usize,
        len: usize,
    },
}
impl ErrorSrc {
    pub fn new_invalid(field: impl Into<String>, desc: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            desc: desc.into(),
        }
    }
    pub fn new_argument(arg: impl Into<String>, desc: impl Into<String>) -> Self {
        Self::Argument {
            arg: arg.into(),
            desc: desc.into(),
        }
    }
    pub fn new_out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}
impl From<String> for ErrorSrc {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}
impl From<&'_ str> for ErrorSrc {
    fn from(s: &str) -> Self {
        Self::Msg(s.into())
    }
}

impl Display for ErrorSrc {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorSrc::*;
        match self {
            Msg(blah) => {
                for (idx, line) in blah.lines().enumerate() {
                    if idx > 0 {
                        writeln!(fmt)?;
                    }
                    line.fmt(fmt)?;
                }
                Ok(())
            }
            Invalid { field, desc } => write!(fmt, "{} {}", field, desc),
            Argument { arg, desc } => write!(fmt, "illegal argument `{}`: {}", arg, desc),
            OutOfRange { index, len } => write!(
                fmt,
                "index {} is out of range, expected an index in [0, {})",
                index, len
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ErrorCtx {
    Msg(String),
}
impl ErrorCtx {
    pub fn new_msg(s: impl Into<String>) -> Self {
        Self::Msg(s.into())
    }
}
impl From<String> for ErrorCtx {
    fn from(s: String) -> Self {
        Self::new_msg(s)
    }
}
impl From<&'_ str> for ErrorCtx {
    fn from(s: &str) -> Self {
        Self::new_msg(s)
    }
}
impl Display for ErrorCtx {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ErrorCtx::*;
        match self {
            Msg(blah) => {
                for (idx, line) in blah.lines().enumerate() {
                    if idx > 0 {
                        writeln!(fmt)?;
                    }
                    line.fmt(fmt)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Error {
    pub src: ErrorSrc,
    pub ctx: Vec<ErrorCtx>,
}
impl<T> From<T> for Error
where
    T: Into<ErrorSrc>,
{
    fn from(t: T) -> Self {
        Self {
            src: t.into(),
            ctx: vec![],
        }
    }
}
impl Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.src.fmt(fmt)?;
        for ctx in self.ctx.iter() {
            writeln!(fmt)?;
            ctx.fmt(fmt)?;
        }
        Ok(())
    }
}
impl std::error::Error for Error {}

impl Error {
    /// True if the error is a rejected assignment.
    pub fn is_validation(&self) -> bool {
        matches!(self.src, ErrorSrc::Invalid { .. })
    }
    /// True if the error is a missing argument.
    pub fn is_argument(&self) -> bool {
        matches!(self.src, ErrorSrc::Argument { .. })
    }
    /// True if the error is an out-of-range index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.src, ErrorSrc::OutOfRange { .. })
    }
}

pub type Res<T> = Result<T, Error>;

pub trait WithCtx: Sized {
    type Output;
    fn context<E>(self, ctx: impl FnOnce() -> E) -> Self::Output
    where
        E: Into<ErrorCtx>;
    fn with_context(self, ctx: impl Into<ErrorCtx>) -> Self::Output {
        self.context(|| ctx)
    }
}

impl WithCtx for ErrorSrc {
    type Output = Error;
    fn context<E>(self, ctx: impl FnOnce() -> E) -> Self::Output
    where
        E: Into<ErrorCtx>,
    {
        Error {
            src: self,
            ctx: vec![ctx().into()],
        }
    }
}
impl WithCtx for Error {
    type Output = Error;
    fn context<E>(mut self, ctx: impl FnOnce() -> E) -> Self::Output
    where
        E: Into<ErrorCtx>,
    {
        self.ctx.push(ctx().into());
        self
    }
}
impl<T, E> WithCtx for Result<T, E>
where
    E: Into<Error>,
{
    type Output = Res<T>;
    fn context<Er>(self, ctx: impl FnOnce() -> Er) -> Self::Output
    where
        Er: Into<ErrorCtx>,
    {
        self.map_err(|err| err.into().context(ctx))
    }
}
