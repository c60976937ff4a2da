//! Class identity, as far as reporting goes.

use std::fmt;

/// The display name of an exception's class.
///
/// Anonymous classes have names like `#<Class:0x000055d5>`, which the
/// reporter leaves out of the entry line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Class {
    name: String,
}

impl Class {
    /// The prefix which marks a class name as anonymous.
    pub const ANONYMOUS_MARKER: char = '#';

    pub fn new(name: impl Into<String>) -> Class {
        Class { name: name.into() }
    }

    /// A class with no name, described by an address.
    pub fn anonymous(address: usize) -> Class {
        Class::new(format!("#<Class:{:#018x}>", address))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.starts_with(Class::ANONYMOUS_MARKER)
    }
}

impl Default for Class {
    fn default() -> Self {
        Class::new("RuntimeError")
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn anonymous() {
        assert!(Class::anonymous(0xdead).is_anonymous());
        assert_eq!(Class::anonymous(0x10).name(), "#<Class:0x0000000000000010>");
        assert!(!Class::new("ArgumentError").is_anonymous());
        assert!(!Class::new("").is_anonymous());
    }
}
