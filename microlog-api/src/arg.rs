/// A single typed argument for a format string.
///
/// # Examples
///
/// ```rust
/// use microlog_api::Arg;
///
/// let count = Arg::from(42);
/// let name = Arg::from("conv2d");
/// let scale = Arg::from(0.5);
///
/// assert_eq!(count, Arg::Int(42));
/// assert_eq!(name, Arg::Text("conv2d"));
/// assert_eq!(scale, Arg::Float(0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    /// Consumed by `%d`.
    Int(i32),
    /// Consumed by `%s`.
    Text(&'a str),
    /// Consumed by `%f`.
    Float(f64),
}

impl Arg<'_> {
    /// Returns the kind of value this argument carries.
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Int(_) => ArgKind::Int,
            Arg::Text(_) => ArgKind::Text,
            Arg::Float(_) => ArgKind::Float,
        }
    }
}

/// The kind of an [`Arg`], without its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// A signed 32-bit integer.
    Int,
    /// A text fragment.
    Text,
    /// A double-precision float.
    Float,
}

impl core::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgKind::Int => write!(f, "integer"),
            ArgKind::Text => write!(f, "text"),
            ArgKind::Float => write!(f, "float"),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Text(value)
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Arg::Int(value)
    }
}

impl From<i16> for Arg<'_> {
    fn from(value: i16) -> Self {
        Arg::Int(value.into())
    }
}

impl From<i8> for Arg<'_> {
    fn from(value: i8) -> Self {
        Arg::Int(value.into())
    }
}

impl From<u16> for Arg<'_> {
    fn from(value: u16) -> Self {
        Arg::Int(value.into())
    }
}

impl From<u8> for Arg<'_> {
    fn from(value: u8) -> Self {
        Arg::Int(value.into())
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(value.into())
    }
}
