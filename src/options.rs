use crate::geometry::Width;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The width the formatter aims for when none is given.
pub const DEFAULT_MAX_WIDTH: Width = 98;

/// Options that apply to formatting a whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PrintOptions {
    /// The maximum line width, in columns. Always positive.
    pub max_width: Width,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("The maximum line width must be at least one column.")]
    ZeroWidth,
}

impl PrintOptions {
    pub fn new(max_width: Width) -> Result<PrintOptions, OptionsError> {
        PrintOptions::default().with_max_width(max_width)
    }

    pub fn with_max_width(mut self, max_width: Width) -> Result<PrintOptions, OptionsError> {
        if max_width == 0 {
            return Err(OptionsError::ZeroWidth);
        }
        self.max_width = max_width;
        Ok(self)
    }
}

impl Default for PrintOptions {
    fn default() -> PrintOptions {
        PrintOptions {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options() {
        assert_eq!(PrintOptions::default().max_width, 98);
        assert_eq!(PrintOptions::new(40).map(|opts| opts.max_width), Ok(40));
        assert_eq!(PrintOptions::new(0), Err(OptionsError::ZeroWidth));
    }
}
