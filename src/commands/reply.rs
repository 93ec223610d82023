use std::fmt;

/// Result of a successful command, rendered as one output line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// Exact area, kept doubled so the half is never lost
    Area { doubled: u128 },
    /// Averaged area, rounded to one fractional digit
    Mean(f64),
    Count(usize),
    Flag(bool),
}

impl Reply {
    pub fn area(doubled: u128) -> Self {
        Reply::Area { doubled }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Area { doubled } => {
                let tenths = if doubled % 2 == 0 { 0 } else { 5 };
                write!(f, "{}.{}", doubled / 2, tenths)
            }
            Reply::Mean(mean) => write!(f, "{:.1}", mean),
            Reply::Count(count) => write!(f, "{}", count),
            Reply::Flag(true) => f.write_str("<TRUE>"),
            Reply::Flag(false) => f.write_str("<FALSE>"),
        }
    }
}
